//! Year-independent calendar day

use std::fmt;

/// Days in the non-leap reference year
pub const DAYS_IN_YEAR: u16 = 365;

/// Abbreviated month names, January first
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const DAYS_PER_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A birthday as (month, day) in a non-leap year
///
/// Ordering follows the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthday {
    month: u8,
    day: u8,
}

impl Birthday {
    /// Create from a 1-based month and 1-based day
    ///
    /// Returns `None` for dates that do not exist in a non-leap year.
    #[must_use]
    pub fn new(month: u8, day: u8) -> Option<Self> {
        let max_day = *DAYS_PER_MONTH.get(usize::from(month).checked_sub(1)?)?;
        (1..=max_day).contains(&day).then_some(Self { month, day })
    }

    /// Create from a zero-based day of the year (0 = Jan 1, 364 = Dec 31)
    ///
    /// # Examples
    /// ```
    /// use bagels_paradox::core::Birthday;
    ///
    /// assert_eq!(Birthday::from_ordinal(59).unwrap().to_string(), "Mar 1");
    /// assert!(Birthday::from_ordinal(365).is_none());
    /// ```
    #[must_use]
    pub fn from_ordinal(ordinal: u16) -> Option<Self> {
        if ordinal >= DAYS_IN_YEAR {
            return None;
        }

        let mut remaining = ordinal;
        for (index, &len) in DAYS_PER_MONTH.iter().enumerate() {
            let len = u16::from(len);
            if remaining < len {
                return Some(Self {
                    month: index as u8 + 1,
                    day: remaining as u8 + 1,
                });
            }
            remaining -= len;
        }

        None
    }

    /// Zero-based day of the year
    #[must_use]
    pub fn ordinal(self) -> u16 {
        let before: u16 = DAYS_PER_MONTH[..usize::from(self.month - 1)]
            .iter()
            .map(|&d| u16::from(d))
            .sum();
        before + u16::from(self.day) - 1
    }

    /// Month, 1-12
    #[inline]
    #[must_use]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Day of month, starting at 1
    #[inline]
    #[must_use]
    pub const fn day(self) -> u8 {
        self.day
    }

    #[must_use]
    pub fn month_name(self) -> &'static str {
        MONTHS[usize::from(self.month - 1)]
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.day())
    }
}
