use std::str::FromStr;

use strum_macros::{Display, EnumString};

use crate::error::SurfaceError;

/// How a finished path is painted. Each variant is one PDF path-painting
/// operator; its `Display` form is the operator itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumString)]
pub enum PaintStyle {
    #[strum(to_string = "S")]
    Stroke,
    #[strum(to_string = "s")]
    CloseStroke,
    #[strum(to_string = "f")]
    Fill,
    #[strum(to_string = "f*")]
    FillEvenOdd,
    #[strum(to_string = "B")]
    FillStroke,
    #[strum(to_string = "B*")]
    FillStrokeEvenOdd,
    #[strum(to_string = "b")]
    CloseFillStroke,
    #[strum(to_string = "b*")]
    CloseFillStrokeEvenOdd,
}

impl Default for PaintStyle {
    fn default() -> Self {
        PaintStyle::Stroke
    }
}

impl PaintStyle {
    /// Resolves a style token. `""`/`"D"` outline, `"F"` fill and `"DF"`/`"FD"`
    /// fill and outline are matched case-insensitively; anything else must be
    /// a raw path-painting operator.
    pub fn from_token(token: &str) -> Result<Self, SurfaceError> {
        match token.to_ascii_uppercase().as_str() {
            "" | "D" => Ok(PaintStyle::Stroke),
            "F" => Ok(PaintStyle::Fill),
            "DF" | "FD" => Ok(PaintStyle::FillStroke),
            _ => PaintStyle::from_str(token)
                .map_err(|_| SurfaceError::UnknownPaintStyle(token.to_string())),
        }
    }

    /// Whether painting closes each open sub-path first (`s`, `b`, `b*`).
    pub fn closes(&self) -> bool {
        matches!(
            self,
            PaintStyle::CloseStroke
                | PaintStyle::CloseFillStroke
                | PaintStyle::CloseFillStrokeEvenOdd
        )
    }
}
