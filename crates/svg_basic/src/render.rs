use graphics_state::DrawingSurface;
use log::{debug, trace, warn};
use lyon::geom::{point, Point};

use crate::error::PathError;
use crate::types::{Command, PathImage, Segment};

/// Draws `image` onto `surface` and paints the result with `paint_style`.
///
/// The surface's current position is taken once, up front, as the image
/// origin; every coordinate drawn is `origin + scale * argument`, per axis.
/// `H` and `V` keep the other axis at the surface's live position rather
/// than the last point drawn here, and `Z` returns to the point resolved by
/// the most recent `M`.
///
/// Nothing is returned. A segment that can't be interpreted records an error
/// on the surface, and since both loops stop once the surface is no longer
/// ok, no further geometry is drawn. The paint call is made regardless, with
/// `paint_style` passed through untouched.
pub fn render<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    image: &PathImage,
    scale: f64,
    paint_style: &str,
) {
    let mut interpreter = Interpreter::new(surface, scale);
    debug!(
        "rendering {} sub-paths at origin {:?}, scale {}",
        image.sub_paths.len(),
        interpreter.origin,
        scale
    );

    for sub_path in &image.sub_paths {
        if !interpreter.surface.ok() {
            break;
        }
        for segment in sub_path {
            if !interpreter.surface.ok() {
                break;
            }
            if let Err(e) = interpreter.draw(segment) {
                warn!("{}", e);
                interpreter.surface.set_error(e.to_string());
            }
        }
    }

    surface.paint_path(paint_style);
}

struct Interpreter<'a, S: ?Sized> {
    surface: &'a mut S,
    origin: Point<f64>,
    scale: f64,
    current: Point<f64>,
    start: Point<f64>,
}

impl<'a, S: DrawingSurface + ?Sized> Interpreter<'a, S> {
    fn new(surface: &'a mut S, scale: f64) -> Self {
        let origin = surface.position();
        Interpreter {
            surface,
            origin,
            scale,
            current: origin,
            // A Z before any M returns to the origin.
            start: origin,
        }
    }

    fn x(&self, arg: f64) -> f64 {
        self.origin.x + self.scale * arg
    }

    fn y(&self, arg: f64) -> f64 {
        self.origin.y + self.scale * arg
    }

    /// Resolves the coordinate pair starting at `args[i]`.
    fn pair(&self, args: &[f64], i: usize) -> Point<f64> {
        point(self.x(args[i]), self.y(args[i + 1]))
    }

    fn draw(&mut self, segment: &Segment) -> Result<(), PathError> {
        let command = segment.command()?;
        let args = segment.args.as_slice();
        match command {
            Command::MoveTo => {
                let to = self.pair(args, 0);
                self.current = to;
                self.start = to;
                self.surface.move_to(to);
            }
            Command::LineTo => {
                let to = self.pair(args, 0);
                self.surface.line_to(to);
                self.current = to;
            }
            Command::CubicBezier => {
                let ctrl1 = self.pair(args, 0);
                let ctrl2 = self.pair(args, 2);
                let to = self.pair(args, 4);
                self.surface.cubic_bezier_to(ctrl1, ctrl2, to);
                self.current = to;
            }
            Command::QuadraticBezier => {
                let ctrl = self.pair(args, 0);
                let to = self.pair(args, 2);
                self.surface.quadratic_bezier_to(ctrl, to);
                self.current = to;
            }
            Command::HorizontalLine => {
                let to = point(self.x(args[0]), self.surface.y());
                self.surface.line_to(to);
                self.current = to;
            }
            Command::VerticalLine => {
                let to = point(self.surface.x(), self.y(args[0]));
                self.surface.line_to(to);
                self.current = to;
            }
            Command::Close => {
                self.surface.line_to(self.start);
                self.current = self.start;
            }
        }
        trace!("{} {:?} -> {:?}", command, args, self.current);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use lyon::geom::{point, vector};

    use super::render;
    use crate::test_utils::{assert_point_eq, Call, RecordingSurface};
    use crate::types::{PathImage, Segment};

    fn seg(cmd: char, args: &[f64]) -> Segment {
        Segment::new(cmd, args.to_vec())
    }

    #[test]
    fn test_square_scenario() {
        let image = PathImage::new(vec![vec![
            seg('M', &[0.0, 0.0]),
            seg('L', &[10.0, 0.0]),
            seg('L', &[10.0, 10.0]),
            seg('Z', &[]),
        ]]);
        let mut surface = RecordingSurface::at(100.0, 100.0);
        render(&mut surface, &image, 1.0, "D");
        assert_eq!(
            surface.calls,
            vec![
                Call::MoveTo(point(100.0, 100.0)),
                Call::LineTo(point(110.0, 100.0)),
                Call::LineTo(point(110.0, 110.0)),
                Call::LineTo(point(100.0, 100.0)),
                Call::PaintPath("D".to_string()),
            ]
        );
    }

    #[test]
    fn test_scale_and_translate_every_pair() {
        let image = PathImage::new(vec![vec![
            seg('M', &[1.0, 2.0]),
            seg('C', &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
            seg('Q', &[-1.0, -2.0, 0.5, 0.25]),
        ]]);
        let mut surface = RecordingSurface::at(10.0, 20.0);
        render(&mut surface, &image, 2.5, "F");
        assert_eq!(surface.calls.len(), 4);
        match &surface.calls[1] {
            Call::CubicBezierTo(c1, c2, to) => {
                assert_point_eq(*c1, point(12.5, 25.0));
                assert_point_eq(*c2, point(17.5, 30.0));
                assert_point_eq(*to, point(22.5, 35.0));
            }
            other => panic!("unexpected {:?}", other),
        }
        match &surface.calls[2] {
            Call::QuadraticBezierTo(ctrl, to) => {
                assert_point_eq(*ctrl, point(7.5, 15.0));
                assert_point_eq(*to, point(11.25, 20.625));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(surface.calls[3], Call::PaintPath("F".to_string()));
    }

    #[test]
    fn test_origin_is_captured_once() {
        // The surface lands 1000 units away from wherever it is sent, so a
        // re-read origin would shift every later point.
        let image = PathImage::new(vec![
            vec![seg('M', &[0.0, 0.0]), seg('L', &[1.0, 1.0])],
            vec![seg('M', &[2.0, 2.0])],
        ]);
        let mut surface = RecordingSurface::at(5.0, 5.0).with_drift(vector(1000.0, 1000.0));
        render(&mut surface, &image, 1.0, "");
        assert_eq!(
            surface.calls,
            vec![
                Call::MoveTo(point(5.0, 5.0)),
                Call::LineTo(point(6.0, 6.0)),
                Call::MoveTo(point(7.0, 7.0)),
                Call::PaintPath("".to_string()),
            ]
        );
    }

    #[test]
    fn test_horizontal_and_vertical_scenario() {
        let image = PathImage::new(vec![vec![
            seg('M', &[0.0, 0.0]),
            seg('H', &[5.0]),
            seg('V', &[5.0]),
        ]]);
        let mut surface = RecordingSurface::at(100.0, 100.0);
        render(&mut surface, &image, 1.0, "S");
        assert_eq!(
            surface.calls,
            vec![
                Call::MoveTo(point(100.0, 100.0)),
                Call::LineTo(point(105.0, 100.0)),
                Call::LineTo(point(105.0, 105.0)),
                Call::PaintPath("S".to_string()),
            ]
        );
    }

    #[test]
    fn test_horizontal_and_vertical_use_live_position() {
        let image = PathImage::new(vec![vec![
            seg('M', &[0.0, 0.0]),
            seg('H', &[5.0]),
            seg('V', &[5.0]),
        ]]);
        let mut surface = RecordingSurface::at(0.0, 0.0).with_drift(vector(0.0, 3.0));
        render(&mut surface, &image, 2.0, "S");
        assert_eq!(
            surface.calls,
            vec![
                Call::MoveTo(point(0.0, 0.0)),
                // live y is 3.0 after the move, not the tracked 0.0
                Call::LineTo(point(10.0, 3.0)),
                // live x is the H target, y comes from the argument
                Call::LineTo(point(10.0, 10.0)),
                Call::PaintPath("S".to_string()),
            ]
        );
    }

    #[test]
    fn test_vertical_takes_live_x() {
        let image = PathImage::new(vec![vec![
            seg('M', &[0.0, 0.0]),
            seg('H', &[5.0]),
            seg('V', &[5.0]),
        ]]);
        let mut surface = RecordingSurface::at(0.0, 0.0).with_drift(vector(7.0, 3.0));
        render(&mut surface, &image, 2.0, "S");
        assert_eq!(
            surface.calls,
            vec![
                Call::MoveTo(point(0.0, 0.0)),
                Call::LineTo(point(10.0, 3.0)),
                // the H landed at (17, 6), and only its x carries over
                Call::LineTo(point(17.0, 10.0)),
                Call::PaintPath("S".to_string()),
            ]
        );
    }

    #[test]
    fn test_close_returns_to_most_recent_move() {
        let image = PathImage::new(vec![
            vec![seg('M', &[1.0, 1.0]), seg('L', &[2.0, 1.0])],
            vec![
                seg('M', &[5.0, 5.0]),
                seg('L', &[6.0, 5.0]),
                seg('M', &[8.0, 8.0]),
                seg('L', &[9.0, 8.0]),
                seg('Z', &[]),
            ],
        ]);
        let mut surface = RecordingSurface::at(0.0, 0.0);
        render(&mut surface, &image, 1.0, "s");
        assert_eq!(surface.calls[6], Call::LineTo(point(8.0, 8.0)));
    }

    #[test]
    fn test_close_before_any_move_returns_to_origin() {
        let image = PathImage::new(vec![vec![seg('L', &[3.0, 4.0]), seg('Z', &[])]]);
        let mut surface = RecordingSurface::at(10.0, 10.0);
        render(&mut surface, &image, 1.0, "S");
        assert_eq!(surface.calls[1], Call::LineTo(point(10.0, 10.0)));
    }

    #[test]
    fn test_unexpected_command_stops_drawing_but_still_paints() {
        let image = PathImage::new(vec![
            vec![
                seg('M', &[0.0, 0.0]),
                seg('X', &[1.0, 1.0]),
                seg('L', &[2.0, 2.0]),
            ],
            vec![seg('M', &[3.0, 3.0])],
        ]);
        let mut surface = RecordingSurface::at(0.0, 0.0);
        render(&mut surface, &image, 1.0, "DF");
        assert_eq!(
            surface.calls,
            vec![
                Call::MoveTo(point(0.0, 0.0)),
                Call::SetError("Unexpected path command 'X'".to_string()),
                Call::PaintPath("DF".to_string()),
            ]
        );
        assert!(!surface.ok);
    }

    #[test]
    fn test_surface_already_in_error_draws_nothing() {
        let image = PathImage::new(vec![vec![seg('M', &[0.0, 0.0])]]);
        let mut surface = RecordingSurface::at(0.0, 0.0);
        surface.ok = false;
        render(&mut surface, &image, 1.0, "f*");
        assert_eq!(surface.calls, vec![Call::PaintPath("f*".to_string())]);
    }

    #[test]
    fn test_empty_image_only_paints() {
        let mut surface = RecordingSurface::at(0.0, 0.0);
        PathImage::default().render(&mut surface, 1.0, "B*");
        assert_eq!(surface.calls, vec![Call::PaintPath("B*".to_string())]);
    }

    #[test]
    fn test_zero_scale_collapses_to_origin() {
        let image = PathImage::new(vec![vec![seg('M', &[4.0, 4.0]), seg('L', &[9.0, -9.0])]]);
        let mut surface = RecordingSurface::at(7.0, 8.0);
        render(&mut surface, &image, 0.0, "S");
        assert_eq!(surface.calls[0], Call::MoveTo(point(7.0, 8.0)));
        assert_eq!(surface.calls[1], Call::LineTo(point(7.0, 8.0)));
    }

    // Segments whose argument count does not match their command are
    // rejected here; unchecked indexing would read out of bounds instead.
    #[test]
    fn test_argument_count_mismatch_is_recorded() {
        let image = PathImage::new(vec![vec![
            seg('M', &[0.0, 0.0]),
            seg('C', &[1.0, 2.0]),
            seg('L', &[2.0, 2.0]),
        ]]);
        let mut surface = RecordingSurface::at(0.0, 0.0);
        render(&mut surface, &image, 1.0, "S");
        assert_eq!(
            surface.calls,
            vec![
                Call::MoveTo(point(0.0, 0.0)),
                Call::SetError("Path command 'C' expects 6 arguments, found 2".to_string()),
                Call::PaintPath("S".to_string()),
            ]
        );
    }
}
