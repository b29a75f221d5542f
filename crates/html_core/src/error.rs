use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Rejected user input. Raised before anything reaches the engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("`{0}` is not a valid color")]
    InvalidColor(String),
    #[error("`{0}` does not resolve to a valid URL")]
    InvalidUrl(String),
    #[error("image `{}` does not exist", .0.display())]
    MissingImage(PathBuf),
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("short write to {}: {written} of {expected} bytes", .path.display())]
    ShortWrite {
        path: PathBuf,
        written: usize,
        expected: usize,
    },
}

/// A command state answer from the engine that could not be applied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolbarError {
    #[error("unexpected result: {0}")]
    Malformed(String),
    #[error("no toolbar control for `{0}`")]
    UnknownCommand(String),
}
