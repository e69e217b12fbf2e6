use serde::Deserialize;

/// The user unit of measure. Coordinates handed to the graphics state are in
/// this unit and get multiplied by [`Unit::scale_factor`] on the way out.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Pt,
    Mm,
    Cm,
    #[serde(rename = "in")]
    In,
}

impl Default for Unit {
    fn default() -> Self {
        Unit::Mm
    }
}

impl Unit {
    /// Number of PDF points in one user unit.
    pub fn scale_factor(&self) -> f64 {
        match self {
            Unit::Pt => 1.0,
            Unit::Mm => 72.0 / 25.4,
            Unit::Cm => 72.0 / 2.54,
            Unit::In => 72.0,
        }
    }
}
