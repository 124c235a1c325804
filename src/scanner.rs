use crate::error::{InputError, Result};
use std::{io, str::FromStr};

/// Whitespace-delimited tokens from a line-oriented reader.
pub struct Scanner<R> {
    reader: R,
    buffer: Vec<String>,
    input: String,
}

impl<R: io::BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Scanner {
            reader,
            buffer: Vec::new(),
            input: String::new(),
        }
    }

    /// Next token, or `None` once the reader is exhausted.
    pub fn token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.buffer.pop() {
                return Ok(Some(token));
            }
            self.input.clear();
            if self.reader.read_line(&mut self.input)? == 0 {
                return Ok(None);
            }
            self.buffer = self.input.split_whitespace().rev().map(String::from).collect();
        }
    }

    pub fn tok<T: FromStr>(&mut self) -> Result<T> {
        let token = self.token()?.ok_or(InputError::Missing)?;
        match token.parse() {
            Ok(value) => Ok(value),
            Err(_) => Err(InputError::Malformed(token).into()),
        }
    }
}
