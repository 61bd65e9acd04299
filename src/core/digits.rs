//! Digit string representation
//!
//! A `Digits` value is a fixed-length run of ASCII decimal digits, used both
//! for the Bagels secret and for the player's guesses.

use std::fmt;

/// Number of distinct decimal digit symbols
pub const DIGIT_SYMBOLS: usize = 10;

/// A fixed-length string of ASCII decimal digits
///
/// Repeated digits are allowed here; only generated secrets are guaranteed
/// to be repeat-free (see [`Digits::has_unique_digits`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digits {
    text: String,
}

/// Error type for invalid digit strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigitsError {
    InvalidLength(usize),
    NonDigit(char),
    TooManyDigits(usize),
}

impl fmt::Display for DigitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => write!(f, "Wrong number of digits: {len}"),
            Self::NonDigit(ch) => write!(f, "Not a decimal digit: {ch:?}"),
            Self::TooManyDigits(count) => write!(
                f,
                "Cannot draw {count} unique digits, only {DIGIT_SYMBOLS} exist"
            ),
        }
    }
}

impl std::error::Error for DigitsError {}

impl Digits {
    /// Parse a digit string of exactly `len` characters
    ///
    /// The text is taken verbatim: surrounding whitespace counts toward the
    /// length and is rejected as a non-digit.
    ///
    /// # Errors
    /// Returns `DigitsError` if:
    /// - The character count is not `len`
    /// - Any character is not an ASCII digit
    ///
    /// # Examples
    /// ```
    /// use bagels_paradox::core::Digits;
    ///
    /// let guess = Digits::parse("843", 3).unwrap();
    /// assert_eq!(guess.text(), "843");
    ///
    /// assert!(Digits::parse("84", 3).is_err());
    /// assert!(Digits::parse("8a3", 3).is_err());
    /// ```
    pub fn parse(text: &str, len: usize) -> Result<Self, DigitsError> {
        let count = text.chars().count();
        if count != len {
            return Err(DigitsError::InvalidLength(count));
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_digit()) {
            return Err(DigitsError::NonDigit(bad));
        }

        Ok(Self {
            text: text.to_string(),
        })
    }

    /// Build from digit bytes already known to be valid
    pub(crate) fn from_ascii(bytes: &[u8]) -> Self {
        debug_assert!(bytes.iter().all(u8::is_ascii_digit));
        Self {
            text: bytes.iter().map(|&b| char::from(b)).collect(),
        }
    }

    /// Get the digits as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the digits as ASCII bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of digits
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the digit string contains a specific ASCII digit
    #[inline]
    #[must_use]
    pub fn contains(&self, digit: u8) -> bool {
        self.bytes().contains(&digit)
    }

    /// True when no digit occurs twice
    #[must_use]
    pub fn has_unique_digits(&self) -> bool {
        let mut seen = [false; DIGIT_SYMBOLS];
        for &b in self.bytes() {
            let slot = usize::from(b - b'0');
            if seen[slot] {
                return false;
            }
            seen[slot] = true;
        }
        true
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
