use std::convert::TryFrom;

use log::trace;
use nom::{
    character::complete::{one_of, satisfy},
    combinator::map,
    error::{Error, ErrorKind},
    multi::{count, many0, many1},
    number::complete::double,
    IResult,
};

use crate::error::ParseError;
use crate::types::{Command, Segment, SubPath};

const SEPARATORS: &str = " \t\r\n\x0C,";

fn separators(input: &str) -> IResult<&str, ()> {
    map(many0(one_of(SEPARATORS)), |_| ())(input)
}

/// A number that starts but doesn't finish (`1e`), or that overflows to
/// infinity, is a hard failure pointing at the number's text.
fn coordinate(input: &str) -> IResult<&str, f64> {
    let (number, _) = separators(input)?;
    match double(number) {
        Ok((rest, v)) if v.is_finite() => Ok((rest, v)),
        Ok(_) | Err(nom::Err::Failure(_)) => {
            Err(nom::Err::Failure(Error::new(number, ErrorKind::Float)))
        }
        Err(e) => Err(e),
    }
}

fn number_text(input: &str) -> String {
    input
        .split(|c: char| SEPARATORS.contains(c))
        .next()
        .unwrap_or_default()
        .to_string()
}

fn command_letter(input: &str) -> IResult<&str, char> {
    satisfy(|c| c.is_ascii_alphabetic())(input)
}

/// One or more groups of `n` numbers following a command letter.
fn argument_groups(input: &str, n: usize) -> IResult<&str, Vec<Vec<f64>>> {
    many1(count(coordinate, n))(input)
}

/// Running position while turning relative data into absolute segments.
#[derive(Debug, Default)]
struct Pen {
    x: f64,
    y: f64,
    start_x: f64,
    start_y: f64,
}

impl Pen {
    fn segment(&mut self, command: Command, relative: bool, args: &[f64]) -> Segment {
        let (dx, dy) = if relative { (self.x, self.y) } else { (0.0, 0.0) };
        let args: Vec<f64> = match command {
            Command::HorizontalLine => vec![args[0] + dx],
            Command::VerticalLine => vec![args[0] + dy],
            _ => args
                .iter()
                .enumerate()
                .map(|(i, v)| if i % 2 == 0 { v + dx } else { v + dy })
                .collect(),
        };
        match command {
            Command::MoveTo => {
                self.x = args[0];
                self.y = args[1];
                self.start_x = self.x;
                self.start_y = self.y;
            }
            Command::HorizontalLine => self.x = args[0],
            Command::VerticalLine => self.y = args[0],
            Command::Close => {
                self.x = self.start_x;
                self.y = self.start_y;
            }
            _ => {
                let n = args.len();
                self.x = args[n - 2];
                self.y = args[n - 1];
            }
        }
        Segment::from((command, args))
    }
}

/// Parses SVG path data (the `d` attribute) into absolute segments.
///
/// Only `M L C Q H V Z` are supported, in upper case (absolute) and lower
/// case (relative) forms. Extra argument groups repeat their command, with
/// the pairs following a move-to becoming line-tos.
pub fn parse_path_data(input: &str) -> Result<SubPath, ParseError> {
    let mut segments = vec![];
    let mut pen = Pen::default();
    let mut rest = input;

    loop {
        let (r, _) = separators(rest).map_err(|_| ParseError::Trailing(rest.to_string()))?;
        if r.is_empty() {
            break;
        }
        let (r, letter) =
            command_letter(r).map_err(|_| ParseError::Trailing(r.to_string()))?;
        let command = Command::try_from(letter.to_ascii_uppercase())
            .map_err(|_| ParseError::UnsupportedCommand(letter))?;
        if segments.is_empty() && command != Command::MoveTo {
            return Err(ParseError::MissingMoveTo(letter));
        }
        let relative = letter.is_ascii_lowercase();

        if command == Command::Close {
            segments.push(pen.segment(command, relative, &[]));
            rest = r;
            continue;
        }

        let (r, groups) = argument_groups(r, command.arg_count()).map_err(|e| match e {
            nom::Err::Failure(e) => ParseError::InvalidNumber(number_text(e.input)),
            _ => ParseError::MissingArguments(letter),
        })?;
        for (i, group) in groups.iter().enumerate() {
            let command = match command {
                Command::MoveTo if i > 0 => Command::LineTo,
                other => other,
            };
            segments.push(pen.segment(command, relative, group));
        }
        rest = r;
    }

    trace!("parsed {} segments from path data", segments.len());
    Ok(segments)
}
