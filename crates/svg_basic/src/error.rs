use thiserror::Error;

/// Problems found while interpreting a [`PathImage`](crate::PathImage).
/// These are recorded on the drawing surface rather than returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("Unexpected path command '{0}'")]
    UnexpectedCommand(char),
    #[error("Path command '{command}' expects {expected} arguments, found {found}")]
    ArgumentCount {
        command: char,
        expected: usize,
        found: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("unsupported path command '{0}'")]
    UnsupportedCommand(char),
    #[error("invalid number \"{0}\" in path data")]
    InvalidNumber(String),
    #[error("path command '{0}' is missing arguments")]
    MissingArguments(char),
    #[error("path data must begin with a move-to, found '{0}'")]
    MissingMoveTo(char),
    #[error("unexpected input in path data: \"{0}\"")]
    Trailing(String),
}
