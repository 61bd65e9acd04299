//! Formatting utilities for terminal output

use crate::core::Birthday;
use indicatif::{ProgressBar, ProgressStyle};

/// Format a count with comma thousands separators
#[must_use]
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    result
}

/// Join birthdays as "Mon D" separated by ", "
#[must_use]
pub fn format_birthday_list(birthdays: &[Birthday]) -> String {
    birthdays
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Progress bar for a simulation batch, drawn on stderr
///
/// A hidden bar is returned when `visible` is false so callers can drive it
/// unconditionally.
#[must_use]
pub fn simulation_progress_bar(trials: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(trials as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}
