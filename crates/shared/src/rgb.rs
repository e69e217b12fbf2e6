use serde::Deserialize;

/// An RGB colour with components in `0.0..=255.0`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "[f32; 3]")]
pub struct Rgb {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::new(0.0, 0.0, 0.0)
    }
}

impl From<[f32; 3]> for Rgb {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Rgb::new(r, g, b)
    }
}

impl Rgb {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        let red = Rgb::clamp(r);
        let green = Rgb::clamp(g);
        let blue = Rgb::clamp(b);
        Rgb { red, green, blue }
    }

    pub fn set(&mut self, c: Rgb) {
        *self = c;
    }

    /// Components scaled to the `0.0..=1.0` range PDF colour operators expect.
    pub fn unit_components(&self) -> (f32, f32, f32) {
        (self.red / 255.0, self.green / 255.0, self.blue / 255.0)
    }

    pub fn is_black(&self) -> bool {
        self.red == 0.0 && self.green == 0.0 && self.blue == 0.0
    }

    fn clamp(v: f32) -> f32 {
        if v > 255.0 {
            255.0
        } else if v < 0.0 {
            0.0
        } else {
            v
        }
    }
}
