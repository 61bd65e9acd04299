//! Bagels secret generation

use crate::core::{DIGIT_SYMBOLS, Digits, DigitsError};
use rand::Rng;
use rand::seq::SliceRandom;

/// Draw `digit_count` distinct digits in random order
///
/// Shuffles the ten digit symbols and keeps the first `digit_count`.
///
/// # Errors
/// Returns `DigitsError::TooManyDigits` if `digit_count` exceeds 10, and
/// `DigitsError::InvalidLength(0)` for a zero-length secret.
///
/// # Examples
/// ```
/// use bagels_paradox::generator::generate_secret;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let secret = generate_secret(3, &mut rng).unwrap();
/// assert_eq!(secret.len(), 3);
/// assert!(secret.has_unique_digits());
/// ```
pub fn generate_secret<R: Rng + ?Sized>(
    digit_count: usize,
    rng: &mut R,
) -> Result<Digits, DigitsError> {
    if digit_count > DIGIT_SYMBOLS {
        return Err(DigitsError::TooManyDigits(digit_count));
    }
    if digit_count == 0 {
        return Err(DigitsError::InvalidLength(0));
    }

    let mut symbols: [u8; DIGIT_SYMBOLS] = *b"0123456789";
    symbols.shuffle(rng);

    Ok(Digits::from_ascii(&symbols[..digit_count]))
}
