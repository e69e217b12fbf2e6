mod config;
mod draw_state;
mod error;
mod graphics_state;
mod paint_style;
mod path;
mod surface;

pub use crate::config::{Properties, SurfaceConfig};
pub use crate::error::SurfaceError;
pub use crate::graphics_state::{FinishedPath, GraphicsState};
pub use crate::paint_style::PaintStyle;
pub use crate::surface::DrawingSurface;
pub use shared::{Height, LineWidth, Rgb, Unit};
