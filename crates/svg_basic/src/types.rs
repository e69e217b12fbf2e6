use std::convert::TryFrom;

use graphics_state::DrawingSurface;
use strum_macros::Display;

use crate::error::{ParseError, PathError};
use crate::parser::parse_path_data;

/// The path commands the interpreter understands, all absolute.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum Command {
    #[strum(to_string = "M")]
    MoveTo,
    #[strum(to_string = "L")]
    LineTo,
    #[strum(to_string = "C")]
    CubicBezier,
    #[strum(to_string = "Q")]
    QuadraticBezier,
    #[strum(to_string = "H")]
    HorizontalLine,
    #[strum(to_string = "V")]
    VerticalLine,
    #[strum(to_string = "Z")]
    Close,
}

impl Command {
    pub fn letter(&self) -> char {
        match self {
            Command::MoveTo => 'M',
            Command::LineTo => 'L',
            Command::CubicBezier => 'C',
            Command::QuadraticBezier => 'Q',
            Command::HorizontalLine => 'H',
            Command::VerticalLine => 'V',
            Command::Close => 'Z',
        }
    }

    /// How many numbers a segment with this command carries.
    pub fn arg_count(&self) -> usize {
        match self {
            Command::Close => 0,
            Command::HorizontalLine | Command::VerticalLine => 1,
            Command::MoveTo | Command::LineTo => 2,
            Command::QuadraticBezier => 4,
            Command::CubicBezier => 6,
        }
    }
}

impl TryFrom<char> for Command {
    type Error = PathError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'M' => Ok(Command::MoveTo),
            'L' => Ok(Command::LineTo),
            'C' => Ok(Command::CubicBezier),
            'Q' => Ok(Command::QuadraticBezier),
            'H' => Ok(Command::HorizontalLine),
            'V' => Ok(Command::VerticalLine),
            'Z' => Ok(Command::Close),
            other => Err(PathError::UnexpectedCommand(other)),
        }
    }
}

/// One path command letter and its arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub cmd: char,
    pub args: Vec<f64>,
}

impl Segment {
    pub fn new(cmd: char, args: Vec<f64>) -> Self {
        Segment { cmd, args }
    }

    /// The command this segment carries, checked against its argument count.
    pub fn command(&self) -> Result<Command, PathError> {
        let command = Command::try_from(self.cmd)?;
        let expected = command.arg_count();
        if self.args.len() != expected {
            return Err(PathError::ArgumentCount {
                command: self.cmd,
                expected,
                found: self.args.len(),
            });
        }
        Ok(command)
    }
}

impl From<(Command, Vec<f64>)> for Segment {
    fn from((command, args): (Command, Vec<f64>)) -> Self {
        Segment::new(command.letter(), args)
    }
}

/// Segments drawn in order, each starting where the previous one ended.
pub type SubPath = Vec<Segment>;

/// A simple vector image: sub-paths in paint order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathImage {
    pub sub_paths: Vec<SubPath>,
}

impl PathImage {
    pub fn new(sub_paths: Vec<SubPath>) -> Self {
        PathImage { sub_paths }
    }

    /// Builds an image from SVG path data strings, one sub-path per string.
    pub fn from_path_data<S: AsRef<str>>(data: &[S]) -> Result<Self, ParseError> {
        let sub_paths = data
            .iter()
            .map(|d| parse_path_data(d.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PathImage { sub_paths })
    }

    pub fn segment_count(&self) -> usize {
        self.sub_paths.iter().map(Vec::len).sum()
    }

    /// See [`render`](crate::render).
    pub fn render<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        scale: f64,
        paint_style: &str,
    ) {
        crate::render::render(surface, self, scale, paint_style)
    }
}
