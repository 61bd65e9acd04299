//! Random birthday sampling

use crate::core::{Birthday, DAYS_IN_YEAR};
use rand::Rng;

/// Draw a single birthday uniformly from the 365 days of the year
pub fn random_birthday<R: Rng + ?Sized>(rng: &mut R) -> Birthday {
    let ordinal = rng.random_range(0..DAYS_IN_YEAR);
    Birthday::from_ordinal(ordinal).unwrap_or_else(|| unreachable!("ordinal {ordinal} in range"))
}

/// Draw `count` independent birthdays, with replacement
///
/// Duplicates are possible and expected.
///
/// # Examples
/// ```
/// use bagels_paradox::generator::sample_birthdays;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let sample = sample_birthdays(23, &mut StdRng::seed_from_u64(0));
/// assert_eq!(sample.len(), 23);
/// ```
pub fn sample_birthdays<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Birthday> {
    (0..count).map(|_| random_birthday(rng)).collect()
}
