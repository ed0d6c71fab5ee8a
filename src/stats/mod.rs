//! Running statistics across daily games
//!
//! Stats are updated once per completed day. `last_finished_day` records the most recent
//! day already counted, so replays and reloads never count a game twice.

use crate::core::{Day, GUESS_LIMIT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage key for the stats record
pub const STATS_KEY: &str = "stats";

/// Persisted statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    /// Index `n` counts games that ended after `n + 1` guesses
    pub guess_distribution: [u32; GUESS_LIMIT],
    pub last_finished_day: Option<Day>,
}

impl Stats {
    /// Check whether `day` has already been counted
    #[must_use]
    pub fn has_recorded(&self, day: Day) -> bool {
        self.last_finished_day.is_some_and(|last| day <= last)
    }

    /// Count a finished game
    ///
    /// Returns `false` and leaves the stats untouched if `day` is not later than the last
    /// counted day. An unsolved game that used every guess lands in the last distribution
    /// bucket, the same as a win on the final guess.
    ///
    /// # Examples
    /// ```
    /// use rewordle::core::Day;
    /// use rewordle::stats::Stats;
    ///
    /// let mut stats = Stats::default();
    /// assert!(stats.record(Day::new(10), true, 3));
    /// assert!(!stats.record(Day::new(10), true, 3));
    ///
    /// assert_eq!(stats.games_played, 1);
    /// assert_eq!(stats.guess_distribution, [0, 0, 1, 0, 0, 0]);
    /// ```
    pub fn record(&mut self, day: Day, solved: bool, guess_count: usize) -> bool {
        if self.has_recorded(day) {
            return false;
        }

        self.games_played += 1;
        if solved {
            self.games_won += 1;
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }

        if let Some(bucket) = guess_count
            .checked_sub(1)
            .and_then(|i| self.guess_distribution.get_mut(i))
        {
            *bucket += 1;
        }

        self.last_finished_day = Some(day);
        true
    }

    /// Whole-percent win rate, rounded down; zero before any game
    #[must_use]
    pub fn win_rate(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        (u64::from(self.games_won) * 100 / u64::from(self.games_played)) as u32
    }

    /// Largest distribution bucket, for scaling bars
    #[must_use]
    pub fn max_bucket(&self) -> u32 {
        self.guess_distribution.iter().copied().max().unwrap_or(0)
    }

    /// Value of one summary statistic
    #[must_use]
    pub fn value(&self, kind: StatKind) -> StatValue {
        match kind {
            StatKind::Played => StatValue::Count(self.games_played),
            StatKind::WinRate => StatValue::Percent(self.win_rate()),
            StatKind::Streak => StatValue::Count(self.current_streak),
            StatKind::BestStreak => StatValue::Count(self.best_streak),
        }
    }
}

/// Summary statistics shown on the results panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Played,
    WinRate,
    Streak,
    BestStreak,
}

impl StatKind {
    pub const ALL: [Self; 4] = [Self::Played, Self::WinRate, Self::Streak, Self::BestStreak];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Played => "Played",
            Self::WinRate => "Win %",
            Self::Streak => "Current Streak",
            Self::BestStreak => "Max Streak",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatValue {
    Count(u32),
    Percent(u32),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Percent(n) => write!(f, "{n}%"),
        }
    }
}
