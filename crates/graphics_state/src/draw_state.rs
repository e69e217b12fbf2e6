use anyhow::{Ok, Result};
use lyon::math::Point;
use strum_macros::Display;
use thiserror::Error;

/// Tracks where the path under construction is within its current sub-path:
/// nothing begun, begun with a lone move-to, or extended by drawing commands.
#[derive(Debug, Copy, Clone)]
pub struct DrawState(State);

impl Default for DrawState {
    fn default() -> Self {
        DrawState(State::default())
    }
}

impl DrawState {
    pub fn current(&self) -> State {
        self.0
    }

    pub fn is_inactive(&self) -> bool {
        matches!(self.0, State::Inactive)
    }

    pub fn assert_is_inactive(&self) -> Result<()> {
        match &self.0 {
            State::Inactive => Ok(()),
            _ => Err(DrawStateError::AttemptToAccessWrongState("Inactive").into()),
        }
    }

    pub fn assert_is_not_inactive(&self) -> Result<()> {
        match &self.0 {
            State::Inactive => Err(DrawStateError::StateAssertion("Inactive").into()),
            _ => Ok(()),
        }
    }

    pub fn assert_is_active(&self) -> Result<Active> {
        match &self.0 {
            State::Active(s) => Ok(*s),
            _ => Err(DrawStateError::AttemptToAccessWrongState("Active").into()),
        }
    }

    pub fn make_inactive(&mut self) -> Result<()> {
        self.0 = State::Inactive;
        Ok(())
    }

    pub fn make_active(&mut self, at: Point) -> Result<()> {
        match &self.0 {
            State::Inactive => {
                self.0 = State::Active(Active::new(at));
            }
            State::Active(_) => {}
            State::Commands(_) => {
                return Err(DrawStateError::StateTransition("Commands", "Active").into());
            }
        }
        assert!(matches!(self.0, State::Active(_)));
        Ok(())
    }

    /// Records a drawing command ending at `to` and returns the point it started from.
    pub fn make_commands(&mut self, command: Command, to: Point) -> Result<Point> {
        let from = match self.0 {
            State::Inactive => {
                return Err(DrawStateError::StateTransition("Inactive", "Commands").into());
            }
            State::Active(s) => {
                let c: Commands = s.into();
                self.0 = State::Commands(c.with_command(command).with_current(to));
                s.first
            }
            State::Commands(current) => {
                self.0 = State::Commands(current.with_command(command).with_current(to));
                current.current
            }
        };
        assert!(matches!(self.0, State::Commands(_)));
        Ok(from)
    }
}

impl From<Active> for Commands {
    fn from(state: Active) -> Self {
        Commands::new(state.first)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Active {
    pub(crate) first: Point,
}

impl Active {
    pub fn new(first: Point) -> Self {
        Active { first }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Commands {
    pub(crate) line_to: bool,
    pub(crate) cubic_bezier: bool,
    pub(crate) quadratic_bezier: bool,
    pub(crate) current: Point,
    pub(crate) first: Point,
}

impl Commands {
    pub fn new(first: Point) -> Self {
        Commands {
            line_to: false,
            cubic_bezier: false,
            quadratic_bezier: false,
            current: first,
            first,
        }
    }

    pub fn with_command(self, command: Command) -> Self {
        match command {
            Command::CubicBezier => Commands {
                cubic_bezier: true,
                ..self
            },
            Command::QuadraticBezier => Commands {
                quadratic_bezier: true,
                ..self
            },
            Command::LineTo => Commands {
                line_to: true,
                ..self
            },
        }
    }

    pub fn with_current(self, current: Point) -> Self {
        Commands { current, ..self }
    }

    /// Only straight edges so far, so a fill of this sub-path is a polygon.
    pub fn is_polygonal(&self) -> bool {
        self.line_to && !self.cubic_bezier && !self.quadratic_bezier
    }
}

#[derive(Display, Debug, Copy, Clone, PartialEq)]
pub enum Command {
    LineTo,
    CubicBezier,
    QuadraticBezier,
}

#[derive(Debug, Copy, Clone, Display)]
pub enum State {
    Inactive,
    Active(Active),
    Commands(Commands),
}

impl Default for State {
    fn default() -> Self {
        State::Inactive
    }
}

#[derive(Error, Debug)]
pub(crate) enum DrawStateError {
    #[error("invalid state transition: tried to convert {0} to {1}")]
    StateTransition(&'static str, &'static str),
    #[error("invalid attempt to access {0} state while not in {0} mode")]
    AttemptToAccessWrongState(&'static str),
    #[error("is in state {0} but should not be")]
    StateAssertion(&'static str),
}
