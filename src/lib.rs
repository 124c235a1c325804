pub mod digits;
pub mod error;
pub mod scanner;
pub mod shell;

pub use error::{Error, InputError, Result};
