//! Draws simple SVG path images onto a [`DrawingSurface`].
//!
//! An image is a list of sub-paths, each a list of absolute [`Segment`]s
//! using the commands `M L C Q H V Z`. [`render`] scales the image, places it
//! at the surface's current position and paints it with a PDF-style paint
//! token. [`parse_path_data`] builds sub-paths from SVG `d` attribute text.

mod error;
mod parser;
mod render;
mod types;

#[cfg(test)]
mod test_utils;

pub use crate::error::{ParseError, PathError};
pub use crate::parser::parse_path_data;
pub use crate::render::render;
pub use crate::types::{Command, PathImage, Segment, SubPath};
pub use graphics_state::DrawingSurface;
