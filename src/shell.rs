use crate::digits::{digit_sum, MAX_INPUT};
use crate::error::{Error, InputError};
use crate::scanner::Scanner;
use std::io;
use tracing::debug;

pub const PROMPT: &str = "Enter a number from [0-9999]: ";
pub const SUM_MESSAGE: &str = "The sum of all digits in your number amounts to:";
pub const ERROR_MESSAGE: &str = "Input error";

/// Outcome of a single prompt/read/report pass.
#[derive(Debug, PartialEq, Eq)]
pub enum Report {
    Sum(u32),
    Rejected(InputError),
}

/// Accepts `1..=9999`. Zero is turned away even though the formula copes
/// with it.
pub fn validate(x: i64) -> Result<u32, InputError> {
    match u32::try_from(x) {
        Ok(v @ 1..=MAX_INPUT) => Ok(v),
        _ => Err(InputError::OutOfRange(x)),
    }
}

fn read_number<R: io::BufRead>(scan: &mut Scanner<R>) -> io::Result<Result<u32, InputError>> {
    match scan.tok::<i64>() {
        Ok(x) => Ok(validate(x)),
        Err(Error::Input(e)) => Ok(Err(e)),
        Err(Error::Io(e)) => Err(e),
    }
}

/// Prompts once, reads one number and writes either its digit sum or the
/// error line. Only console failures are returned as errors.
pub fn run<R: io::BufRead, W: io::Write>(
    scan: &mut Scanner<R>,
    out: &mut W,
) -> io::Result<Report> {
    write!(out, "{}", PROMPT)?;
    out.flush()?;
    let report = match read_number(scan)? {
        Ok(x) => {
            let sum = digit_sum(x);
            debug!(x, sum, "computed digit sum");
            writeln!(out, "{} {}", SUM_MESSAGE, sum)?;
            Report::Sum(sum)
        }
        Err(e) => {
            debug!(error = %e, "rejected input");
            writeln!(out, "{}", ERROR_MESSAGE)?;
            Report::Rejected(e)
        }
    };
    out.flush()?;
    Ok(report)
}
