use anyhow::{Ok, Result};
use lyon::math::Point;
use lyon::path::PathEvent;

use crate::draw_state::{Command, DrawState, State};

/// Geometry of the path under construction, in points with y pointing down.
#[derive(Debug, Default)]
pub(crate) struct Path {
    events: Vec<PathEvent>,
    draw_state: DrawState,
    has_curves: bool,
}

impl Path {
    pub fn new() -> Self {
        Path::default()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn move_to(&mut self, to: Point) -> Result<()> {
        self.end_if_needed()?;
        self.begin(to)?;
        self.draw_state.assert_is_active()?;
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        !self.draw_state.is_inactive()
    }

    pub fn line_to(&mut self, to: Point) -> Result<()> {
        let from = self.draw_state.make_commands(Command::LineTo, to)?;
        self.events.push(PathEvent::Line { from, to });
        Ok(())
    }

    pub fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point) -> Result<()> {
        let from = self.draw_state.make_commands(Command::QuadraticBezier, to)?;
        self.events.push(PathEvent::Quadratic { from, ctrl, to });
        Ok(())
    }

    pub fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> Result<()> {
        let from = self.draw_state.make_commands(Command::CubicBezier, to)?;
        self.events.push(PathEvent::Cubic {
            from,
            ctrl1,
            ctrl2,
            to,
        });
        Ok(())
    }

    pub fn end(&mut self, close: bool) -> Result<()> {
        self.draw_state.assert_is_not_inactive()?;
        match self.draw_state.current() {
            State::Active(a) => {
                self.events.push(PathEvent::End {
                    first: a.first,
                    last: a.first,
                    close: false,
                });
            }
            State::Commands(c) => {
                self.has_curves |= !c.is_polygonal();
                self.events.push(PathEvent::End {
                    first: c.first,
                    last: c.current,
                    close,
                });
            }
            State::Inactive => unreachable!(),
        }
        self.draw_state.make_inactive()
    }

    /// Closes any open sub-path and hands back the finished geometry.
    pub fn build(&mut self, close: bool) -> Result<(lyon::path::Path, bool)> {
        if !self.draw_state.is_inactive() {
            self.end(close)?;
        }
        let events = std::mem::take(&mut self.events);
        let has_curves = std::mem::take(&mut self.has_curves);

        let mut builder = lyon::path::Path::builder();
        for event in events {
            match event {
                PathEvent::Begin { at } => {
                    builder.begin(at);
                }
                PathEvent::Line { to, .. } => {
                    builder.line_to(to);
                }
                PathEvent::Quadratic { ctrl, to, .. } => {
                    builder.quadratic_bezier_to(ctrl, to);
                }
                PathEvent::Cubic {
                    ctrl1, ctrl2, to, ..
                } => {
                    builder.cubic_bezier_to(ctrl1, ctrl2, to);
                }
                PathEvent::End { close, .. } => builder.end(close),
            }
        }
        Ok((builder.build(), has_curves))
    }

    fn begin(&mut self, at: Point) -> Result<()> {
        self.draw_state.assert_is_inactive()?;
        self.events.push(PathEvent::Begin { at });
        self.draw_state.make_active(at)?;
        Ok(())
    }

    fn end_if_needed(&mut self) -> Result<()> {
        if !self.draw_state.is_inactive() {
            self.end(false)?;
        }
        Ok(())
    }
}
