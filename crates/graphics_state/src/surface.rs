use lyon::geom::Point;

/// A stateful 2D drawing surface that accumulates path geometry and paints it.
///
/// Coordinates are in the surface's user units. Every path primitive appends
/// to an implicit current path and moves the current position to its end
/// point. Errors are sticky: once [`DrawingSurface::ok`] returns `false` it
/// keeps doing so, and further drawing calls are expected to be no-ops.
pub trait DrawingSurface {
    /// The current position.
    fn position(&self) -> Point<f64>;

    fn x(&self) -> f64 {
        self.position().x
    }

    fn y(&self) -> f64 {
        self.position().y
    }

    fn move_to(&mut self, to: Point<f64>);

    fn line_to(&mut self, to: Point<f64>);

    fn cubic_bezier_to(&mut self, ctrl1: Point<f64>, ctrl2: Point<f64>, to: Point<f64>);

    fn quadratic_bezier_to(&mut self, ctrl: Point<f64>, to: Point<f64>);

    fn ok(&self) -> bool;

    /// Records an error unless one is already recorded.
    fn set_error(&mut self, message: String);

    /// Finishes the current path and paints it with the given style token.
    fn paint_path(&mut self, style: &str);
}
