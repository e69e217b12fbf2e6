use derive_more::{Add, Deref, Display, Div, From, Into, Mul, Neg};
use serde::Deserialize;

#[derive(
    Debug, Copy, Clone, Add, Display, From, Into, PartialEq, Mul, Div, Deref, Neg, Deserialize,
)]
#[serde(transparent)]
pub struct LineWidth(f64);

impl LineWidth {
    pub fn new(v: f64) -> Self {
        LineWidth(v)
    }

    pub fn set(&mut self, v: LineWidth) {
        self.0 = *v;
    }
}

impl Default for LineWidth {
    // 0.2 mm, the customary hairline for documents laid out in millimetres
    fn default() -> Self {
        LineWidth::new(0.2)
    }
}

#[cfg(test)]
mod test {
    use super::LineWidth;

    #[test]
    fn set_replaces_value() {
        let mut w = LineWidth::default();
        w.set(LineWidth::new(1.5));
        assert_eq!(*w, 1.5);
        assert_eq!(w * 2.0, LineWidth::new(3.0));
    }
}
