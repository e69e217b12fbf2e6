use lyon::path::LineCap;
use serde::Deserialize;
use shared::{Height, LineWidth, Rgb, Unit};

/// Unit, page height and starting properties for a [`GraphicsState`](crate::GraphicsState).
#[derive(Debug, Copy, Clone, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub unit: Unit,
    pub page_height: Height,
    pub properties: Properties,
}

impl Default for SurfaceConfig {
    // A4 portrait
    fn default() -> Self {
        SurfaceConfig {
            unit: Unit::Mm,
            page_height: Height::new(297.0),
            properties: Properties::default(),
        }
    }
}

impl SurfaceConfig {
    pub fn from_json(input: &str) -> serde_json::Result<Self> {
        serde_json::from_str(input)
    }
}

#[derive(Debug, Copy, Clone, Deserialize)]
#[serde(default)]
pub struct Properties {
    pub line_width: LineWidth,
    #[serde(with = "cap_style")]
    pub line_cap: LineCap,
    pub draw_color: Rgb,
    pub fill_color: Rgb,
}

impl Default for Properties {
    fn default() -> Self {
        Properties {
            line_width: LineWidth::default(),
            line_cap: LineCap::Butt,
            draw_color: Rgb::default(),
            fill_color: Rgb::default(),
        }
    }
}

/// PDF's numeric line cap style, as written by the `J` operator.
pub(crate) fn cap_style_number(cap: LineCap) -> u8 {
    match cap {
        LineCap::Butt => 0,
        LineCap::Round => 1,
        LineCap::Square => 2,
    }
}

mod cap_style {
    use lyon::path::LineCap;
    use serde::{de::Error, Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<LineCap, D::Error> {
        let name = String::deserialize(deserializer)?;
        match name.as_str() {
            "butt" => Ok(LineCap::Butt),
            "round" => Ok(LineCap::Round),
            "square" => Ok(LineCap::Square),
            other => Err(D::Error::custom(format!(
                "Cap style should be butt, round or square but was {}",
                other
            ))),
        }
    }
}
