//! Calendar day index and its short code

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Days elapsed since 1970-01-01 on the local calendar
///
/// The index selects the daily answer and keys the persisted game, so it is derived from the
/// local date rather than UTC: it only changes at local midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Day(u32);

impl Day {
    #[inline]
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Day index of a calendar date; dates before 1970 clamp to day 0
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        let days = date.signed_duration_since(NaiveDate::default()).num_days();
        Self(u32::try_from(days.max(0)).unwrap_or(u32::MAX))
    }

    /// Today's index on the local wall clock
    #[must_use]
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// Calendar date for this index
    #[must_use]
    pub fn date(self) -> NaiveDate {
        NaiveDate::default()
            .checked_add_days(chrono::Days::new(u64::from(self.0)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// The following day
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Base-36 code used in share text and to address past days
    ///
    /// # Examples
    /// ```
    /// use rewordle::core::Day;
    ///
    /// let day = Day::new(20_000);
    /// assert_eq!(day.code(), "ffk");
    /// assert_eq!(Day::from_code("ffk"), Some(day));
    /// ```
    #[must_use]
    pub fn code(self) -> String {
        let mut value = self.0;
        let mut digits = Vec::new();
        loop {
            // value % 36 always fits a base-36 digit
            digits.push(char::from_digit(value % 36, 36).unwrap_or('0'));
            value /= 36;
            if value == 0 {
                break;
            }
        }
        digits.iter().rev().collect()
    }

    /// Parse a base-36 day code, case-insensitive
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        u32::from_str_radix(code, 36).ok().map(Self)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
