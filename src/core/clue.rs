//! Bagels clue calculation and representation
//!
//! Each guessed position yields at most one clue:
//! - Fermi = digit is in the secret at this position
//! - Pico = digit is in the secret at some other position
//!
//! Clues are reported sorted so their order reveals nothing about positions.

use super::Digits;
use std::fmt;

/// Feedback for a single guessed digit
///
/// Variant order gives the display order (`Fermi` before `Pico`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Clue {
    Fermi,
    Pico,
}

impl Clue {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fermi => "Fermi",
            Self::Pico => "Pico",
        }
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of comparing a guess against the secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClueResult {
    /// Exact match
    Correct,
    /// No guessed digit appears in the secret
    Bagels,
    /// Sorted, non-empty clue list
    Clues(Vec<Clue>),
}

impl ClueResult {
    #[inline]
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }

    /// Number of Fermi clues (all positions for an exact match)
    #[must_use]
    pub fn count_fermi(&self, digit_count: usize) -> usize {
        match self {
            Self::Correct => digit_count,
            Self::Bagels => 0,
            Self::Clues(clues) => clues.iter().filter(|&&c| c == Clue::Fermi).count(),
        }
    }

    #[must_use]
    pub fn count_pico(&self) -> usize {
        match self {
            Self::Clues(clues) => clues.iter().filter(|&&c| c == Clue::Pico).count(),
            _ => 0,
        }
    }
}

impl fmt::Display for ClueResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => f.write_str("You got it!"),
            Self::Bagels => f.write_str("Bagels"),
            Self::Clues(clues) => {
                for (i, clue) in clues.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{clue}")?;
                }
                Ok(())
            }
        }
    }
}

/// Calculate the clues for `guess` against `secret`
///
/// Every position is checked on its own against the whole secret, so a
/// secret digit can earn Pico at more than one guessed position when the
/// guess repeats it.
///
/// # Examples
/// ```
/// use bagels_paradox::core::{Digits, compute_clues};
///
/// let secret = Digits::parse("248", 3).unwrap();
/// let guess = Digits::parse("843", 3).unwrap();
/// assert_eq!(compute_clues(&guess, &secret).to_string(), "Fermi Pico");
/// ```
#[must_use]
pub fn compute_clues(guess: &Digits, secret: &Digits) -> ClueResult {
    debug_assert_eq!(guess.len(), secret.len(), "guess and secret lengths differ");

    if guess == secret {
        return ClueResult::Correct;
    }

    let mut clues: Vec<Clue> = guess
        .bytes()
        .iter()
        .zip(secret.bytes())
        .filter_map(|(&g, &s)| {
            if g == s {
                Some(Clue::Fermi)
            } else if secret.contains(g) {
                Some(Clue::Pico)
            } else {
                None
            }
        })
        .collect();

    if clues.is_empty() {
        return ClueResult::Bagels;
    }

    clues.sort_unstable();
    ClueResult::Clues(clues)
}
