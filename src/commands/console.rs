//! Line-oriented console over any reader/writer pair
//!
//! The games talk to a `Console` instead of stdin/stdout directly so the
//! same loops can be driven by in-memory buffers.

use super::CommandError;
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Prompt printed before every read
pub const PROMPT: &str = "> ";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for multi-line blocks
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line of text
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn say(&mut self, text: impl Display) -> Result<(), CommandError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Show the `> ` prompt and read one line
    ///
    /// The line ending is removed; all other characters are kept as typed.
    /// Returns `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be written or input cannot be read.
    pub fn read_line(&mut self) -> Result<Option<String>, CommandError> {
        self.read_after(PROMPT)
    }

    /// Like [`Console::read_line`], but end of input is an error
    ///
    /// # Errors
    ///
    /// Returns `CommandError::InputClosed` at end of input, or an I/O error.
    pub fn ask(&mut self) -> Result<String, CommandError> {
        self.read_line()?.ok_or(CommandError::InputClosed)
    }

    /// Show `message` without a newline and wait for a line
    ///
    /// End of input counts as a key press.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure.
    pub fn pause(&mut self, message: &str) -> Result<(), CommandError> {
        self.read_after(message).map(|_| ())
    }

    fn read_after(&mut self, prompt: &str) -> Result<Option<String>, CommandError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
