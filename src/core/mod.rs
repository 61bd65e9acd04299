//! Core domain types for Bagels and the Birthday Paradox
//!
//! Pure value types and the clue rules. Nothing here touches randomness or I/O.

mod birthday;
mod clue;
mod digits;

pub use birthday::{Birthday, DAYS_IN_YEAR, MONTHS};
pub use clue::{Clue, ClueResult, compute_clues};
pub use digits::{DIGIT_SYMBOLS, Digits, DigitsError};
