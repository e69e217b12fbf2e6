//! 1. Only put small concepts here. Nothing major
//! 2. This crate *must* have no dependencies on other local crates in the project

mod dimensions;
mod line_width;
mod rgb;
mod unit;

pub use dimensions::Height;
pub use line_width::LineWidth;
pub use rgb::Rgb;
pub use unit::Unit;
