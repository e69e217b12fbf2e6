use approx::{assert_relative_eq, AbsDiffEq, RelativeEq};
use graphics_state::DrawingSurface;
use lyon::geom::{point, vector, Point, Vector};

pub fn assert_point_eq(left: Point<f64>, right: Point<f64>) {
    assert_relative_eq!(AssertablePoint(left), AssertablePoint(right))
}

#[derive(PartialEq, Debug)]
pub(crate) struct AssertablePoint(pub Point<f64>);

impl AbsDiffEq for AssertablePoint {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.0.x, &other.0.x, epsilon)
            && f64::abs_diff_eq(&self.0.y, &other.0.y, epsilon)
    }
}

impl RelativeEq for AssertablePoint {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.0.x, &other.0.x, epsilon, max_relative)
            && f64::relative_eq(&self.0.y, &other.0.y, epsilon, max_relative)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    MoveTo(Point<f64>),
    LineTo(Point<f64>),
    CubicBezierTo(Point<f64>, Point<f64>, Point<f64>),
    QuadraticBezierTo(Point<f64>, Point<f64>),
    SetError(String),
    PaintPath(String),
}

/// Records every call made against it. Path calls move the position to their
/// end point plus `drift`, which lets tests tell live reads from cached ones.
#[derive(Debug)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
    pub position: Point<f64>,
    pub ok: bool,
    drift: Vector<f64>,
}

impl RecordingSurface {
    pub fn at(x: f64, y: f64) -> Self {
        RecordingSurface {
            calls: vec![],
            position: point(x, y),
            ok: true,
            drift: vector(0.0, 0.0),
        }
    }

    pub fn with_drift(self, drift: Vector<f64>) -> Self {
        RecordingSurface { drift, ..self }
    }

    fn land(&mut self, to: Point<f64>) {
        self.position = to + self.drift;
    }
}

impl DrawingSurface for RecordingSurface {
    fn position(&self) -> Point<f64> {
        self.position
    }

    fn move_to(&mut self, to: Point<f64>) {
        self.calls.push(Call::MoveTo(to));
        self.land(to);
    }

    fn line_to(&mut self, to: Point<f64>) {
        self.calls.push(Call::LineTo(to));
        self.land(to);
    }

    fn cubic_bezier_to(&mut self, ctrl1: Point<f64>, ctrl2: Point<f64>, to: Point<f64>) {
        self.calls.push(Call::CubicBezierTo(ctrl1, ctrl2, to));
        self.land(to);
    }

    fn quadratic_bezier_to(&mut self, ctrl: Point<f64>, to: Point<f64>) {
        self.calls.push(Call::QuadraticBezierTo(ctrl, to));
        self.land(to);
    }

    fn ok(&self) -> bool {
        self.ok
    }

    fn set_error(&mut self, message: String) {
        self.calls.push(Call::SetError(message));
        self.ok = false;
    }

    fn paint_path(&mut self, style: &str) {
        self.calls.push(Call::PaintPath(style.to_string()));
    }
}
