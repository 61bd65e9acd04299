//! Duplicate detection within a sample

use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Return a value that occurs more than once in `sample`
///
/// If every value is distinct the result is `None`. Otherwise pairs are
/// scanned in order (i ascending, then j > i ascending) and the first equal
/// pair's value is returned, so the answer is fixed for a given sample.
///
/// # Examples
/// ```
/// use bagels_paradox::core::Birthday;
/// use bagels_paradox::simulation::find_match;
///
/// let may_4 = Birthday::new(5, 4).unwrap();
/// let jul_1 = Birthday::new(7, 1).unwrap();
/// assert_eq!(find_match(&[may_4, jul_1, may_4]), Some(may_4));
/// assert_eq!(find_match(&[may_4, jul_1]), None);
/// ```
#[must_use]
pub fn find_match<T: Copy + Eq + Hash>(sample: &[T]) -> Option<T> {
    let distinct: FxHashSet<&T> = sample.iter().collect();
    if distinct.len() == sample.len() {
        return None;
    }

    sample.iter().enumerate().find_map(|(i, a)| {
        sample[i + 1..].iter().any(|b| a == b).then_some(*a)
    })
}
