use anyhow::Result;
use log::{debug, trace, warn};
use lyon::geom::{point as s_point, Point as SPoint, QuadraticBezierSegment};
use lyon::math::{point, Point};
use lyon::path::LineCap;
use shared::{Height, LineWidth, Rgb};

use crate::config::{cap_style_number, Properties, SurfaceConfig};
use crate::error::SurfaceError;
use crate::paint_style::PaintStyle;
use crate::path::Path;
use crate::surface::DrawingSurface;

#[derive(Debug)]
enum State {
    PageDescription,
    Path(Path),
}

impl Default for State {
    fn default() -> Self {
        State::PageDescription
    }
}

/// A path that has been painted, in points with the y axis pointing down the page.
#[derive(Debug, Clone)]
pub struct FinishedPath {
    path: lyon::path::Path,
    style: PaintStyle,
    has_curves: bool,
}

impl FinishedPath {
    pub fn path(&self) -> &lyon::path::Path {
        &self.path
    }

    pub fn style(&self) -> PaintStyle {
        self.style
    }

    pub fn has_curves(&self) -> bool {
        self.has_curves
    }
}

/// A PDF page's graphics state, writing path construction and painting
/// operators to a content stream.
///
/// User coordinates grow rightwards and down the page from the top-left
/// corner, in the configured unit. They are converted to PDF device space
/// (points, origin bottom-left) as operators are written.
#[derive(Debug)]
pub struct GraphicsState {
    properties: Properties,
    k: f64,
    page_height: Height,
    current: SPoint<f64>,
    operators: Vec<String>,
    finished_paths: Vec<FinishedPath>,
    error: Option<SurfaceError>,
    state: State,
}

impl Default for GraphicsState {
    fn default() -> Self {
        GraphicsState::new(SurfaceConfig::default())
    }
}

impl GraphicsState {
    pub fn new(config: SurfaceConfig) -> Self {
        GraphicsState {
            properties: config.properties,
            k: config.unit.scale_factor(),
            page_height: config.page_height,
            current: s_point(0.0, 0.0),
            operators: vec![],
            finished_paths: vec![],
            error: None,
            state: State::default(),
        }
    }

    pub fn properties(&self) -> Properties {
        self.properties
    }

    pub fn error(&self) -> Option<&SurfaceError> {
        self.error.as_ref()
    }

    /// Operators written so far, one per entry.
    pub fn operators(&self) -> &[String] {
        &self.operators
    }

    /// The content stream written so far.
    pub fn content(&self) -> String {
        self.operators.join("\n")
    }

    pub fn finished_paths(&self) -> &[FinishedPath] {
        &self.finished_paths
    }

    pub fn set_xy(&mut self, x: f64, y: f64) {
        self.current = s_point(x, y);
    }

    pub fn set_x(&mut self, x: f64) {
        self.current.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.current.y = y;
    }

    pub fn set_line_width(&mut self, w: LineWidth) {
        if !self.allows_property_change("w") {
            return;
        }
        self.properties.line_width.set(w);
        self.out(format!("{:.2} w", *w * self.k));
    }

    pub fn set_line_cap(&mut self, c: LineCap) {
        if !self.allows_property_change("J") {
            return;
        }
        self.properties.line_cap = c;
        self.out(format!("{} J", cap_style_number(c)));
    }

    pub fn set_draw_color(&mut self, c: Rgb) {
        if !self.allows_property_change("RG") {
            return;
        }
        self.properties.draw_color.set(c);
        self.out(color_operator(c, "G", "RG"));
    }

    pub fn set_fill_color(&mut self, c: Rgb) {
        if !self.allows_property_change("rg") {
            return;
        }
        self.properties.fill_color.set(c);
        self.out(color_operator(c, "g", "rg"));
    }

    fn allows_property_change(&mut self, operator: &'static str) -> bool {
        if !self.ok() {
            return false;
        }
        if let State::Path(_) = self.state {
            self.record(SurfaceError::NotAllowedInPath(operator));
            return false;
        }
        true
    }

    /// Device-space coordinates as written to the content stream.
    fn device(&self, p: SPoint<f64>) -> (f64, f64) {
        (p.x * self.k, (self.page_height - p.y) * self.k)
    }

    /// Coordinates kept for the finished lyon geometry.
    fn geometry_point(&self, p: SPoint<f64>) -> Point {
        point((p.x * self.k) as f32, (p.y * self.k) as f32)
    }

    fn out(&mut self, operator: String) {
        trace!("{}", operator);
        self.operators.push(operator);
    }

    fn record(&mut self, error: SurfaceError) {
        if self.error.is_none() {
            warn!("graphics state entered error state: {}", error);
            self.error = Some(error);
        }
    }

    /// Runs `f` against the path under construction, entering the path state first.
    /// Failures are recorded and reported as `false`.
    fn with_path<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&mut Path) -> Result<()>,
    {
        self.to_path();
        let result = match &mut self.state {
            State::Path(p) => f(p),
            State::PageDescription => unreachable!(),
        };
        match result {
            Ok(()) => true,
            Err(e) => {
                self.record(SurfaceError::Path(e.to_string()));
                false
            }
        }
    }

    /// Segments need an open sub-path; start one at the current position if there is none.
    fn begin_if_needed(&mut self) {
        let open = match &self.state {
            State::Path(p) => p.is_open(),
            State::PageDescription => false,
        };
        if !open {
            debug!("no open sub-path, beginning one at the current position");
            self.move_to(self.current);
        }
    }

    fn to_path(&mut self) {
        if let State::PageDescription = self.state {
            self.state = State::Path(Path::new());
        }
        assert!(matches!(self.state, State::Path(_)));
    }

    /// Leaves the path state, handing back whatever was under construction.
    fn to_page_description(&mut self) -> Option<Path> {
        let previous = std::mem::replace(&mut self.state, State::PageDescription);
        assert!(matches!(self.state, State::PageDescription));
        match previous {
            State::Path(p) => Some(p),
            State::PageDescription => None,
        }
    }
}

impl DrawingSurface for GraphicsState {
    fn position(&self) -> SPoint<f64> {
        self.current
    }

    fn move_to(&mut self, to: SPoint<f64>) {
        if !self.ok() {
            return;
        }
        let at = self.geometry_point(to);
        if self.with_path(|p| p.move_to(at)) {
            let (x, y) = self.device(to);
            self.out(format!("{:.2} {:.2} m", x, y));
            self.current = to;
        }
    }

    fn line_to(&mut self, to: SPoint<f64>) {
        if !self.ok() {
            return;
        }
        self.begin_if_needed();
        let at = self.geometry_point(to);
        if self.with_path(|p| p.line_to(at)) {
            let (x, y) = self.device(to);
            self.out(format!("{:.2} {:.2} l", x, y));
            self.current = to;
        }
    }

    fn cubic_bezier_to(&mut self, ctrl1: SPoint<f64>, ctrl2: SPoint<f64>, to: SPoint<f64>) {
        if !self.ok() {
            return;
        }
        self.begin_if_needed();
        let (c1, c2, at) = (
            self.geometry_point(ctrl1),
            self.geometry_point(ctrl2),
            self.geometry_point(to),
        );
        if self.with_path(|p| p.cubic_bezier_to(c1, c2, at)) {
            let (x1, y1) = self.device(ctrl1);
            let (x2, y2) = self.device(ctrl2);
            let (x3, y3) = self.device(to);
            self.out(format!(
                "{:.5} {:.5} {:.5} {:.5} {:.5} {:.5} c",
                x1, y1, x2, y2, x3, y3
            ));
            self.current = to;
        }
    }

    /// PDF has no quadratic operator, so the curve is elevated to the
    /// equivalent cubic starting at the current position.
    fn quadratic_bezier_to(&mut self, ctrl: SPoint<f64>, to: SPoint<f64>) {
        if !self.ok() {
            return;
        }
        self.begin_if_needed();
        let (c, at) = (self.geometry_point(ctrl), self.geometry_point(to));
        if self.with_path(|p| p.quadratic_bezier_to(c, at)) {
            let cubic = QuadraticBezierSegment {
                from: self.current,
                ctrl,
                to,
            }
            .to_cubic();
            let (x1, y1) = self.device(cubic.ctrl1);
            let (x2, y2) = self.device(cubic.ctrl2);
            let (x3, y3) = self.device(cubic.to);
            self.out(format!(
                "{:.5} {:.5} {:.5} {:.5} {:.5} {:.5} c",
                x1, y1, x2, y2, x3, y3
            ));
            self.current = to;
        }
    }

    fn ok(&self) -> bool {
        self.error.is_none()
    }

    fn set_error(&mut self, message: String) {
        self.record(SurfaceError::Message(message));
    }

    fn paint_path(&mut self, style: &str) {
        if !self.ok() {
            debug!("skipping paint \"{}\" in error state", style);
            return;
        }
        let style = match PaintStyle::from_token(style) {
            Ok(style) => style,
            Err(e) => {
                self.record(e);
                return;
            }
        };
        self.out(style.to_string());
        let mut path = match self.to_page_description() {
            Some(path) if !path.is_empty() => path,
            _ => return,
        };
        match path.build(style.closes()) {
            Ok((path, has_curves)) => self.finished_paths.push(FinishedPath {
                path,
                style,
                has_curves,
            }),
            Err(e) => self.record(SurfaceError::Path(e.to_string())),
        }
    }
}

fn color_operator(c: Rgb, gray_op: &str, rgb_op: &str) -> String {
    if c.is_black() {
        format!("{:.3} {}", 0.0, gray_op)
    } else {
        let (r, g, b) = c.unit_components();
        format!("{:.3} {:.3} {:.3} {}", r, g, b, rgb_op)
    }
}
