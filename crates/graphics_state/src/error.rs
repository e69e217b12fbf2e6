use thiserror::Error;

/// Errors recorded on a drawing surface. The first one recorded sticks.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("{0}")]
    Message(String),
    #[error("unknown paint style \"{0}\"")]
    UnknownPaintStyle(String),
    #[error("path construction failed: {0}")]
    Path(String),
    #[error("operator {0} is not allowed while a path is under construction")]
    NotAllowedInPath(&'static str),
}
