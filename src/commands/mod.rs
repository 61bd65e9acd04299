//! Command implementations

pub mod bagels;
pub mod birthday;
pub mod console;

pub use bagels::{BagelsConfig, SessionStats, run_bagels};
pub use birthday::{BirthdayConfig, parse_count, run_birthday_paradox};
pub use console::Console;

use crate::core::DigitsError;
use std::fmt;
use std::io;

/// Error type for the interactive commands
#[derive(Debug)]
pub enum CommandError {
    Io(io::Error),
    /// Input ended while an answer was still required
    InputClosed,
    Digits(DigitsError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Console I/O failed: {e}"),
            Self::InputClosed => write!(f, "Input closed before an answer was given"),
            Self::Digits(e) => write!(f, "Invalid secret configuration: {e}"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Digits(e) => Some(e),
            Self::InputClosed => None,
        }
    }
}

impl From<io::Error> for CommandError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<DigitsError> for CommandError {
    fn from(e: DigitsError) -> Self {
        Self::Digits(e)
    }
}
