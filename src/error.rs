use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Anything wrong with what the user typed. Every variant is reported the
/// same way on the console; the distinction only shows up in the logs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("no number was entered")]
    Missing,
    #[error("`{0}` is not an integer")]
    Malformed(String),
    #[error("{0} is outside the accepted range 1..=9999")]
    OutOfRange(i64),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("console i/o failed")]
    Io(#[from] io::Error),
}
