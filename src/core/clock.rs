//! Time sources for the engine
//!
//! The engine needs two readings: the calendar day, which picks the answer, and a monotonic
//! instant, which drives the feedback timers.

use super::Day;
use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of the current day and instant
pub trait Clock {
    /// Current calendar day
    fn today(&self) -> Day;

    /// Current monotonic instant
    fn now(&self) -> Instant;
}

/// Wall clock: local calendar date and `Instant::now()`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Day {
        Day::today()
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-driven clock for tests and replays
#[derive(Debug, Clone)]
pub struct ManualClock {
    day: Cell<Day>,
    now: Cell<Instant>,
}

impl ManualClock {
    #[must_use]
    pub fn new(day: Day) -> Self {
        Self {
            day: Cell::new(day),
            now: Cell::new(Instant::now()),
        }
    }

    pub fn set_day(&self, day: Day) {
        self.day.set(day);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn today(&self) -> Day {
        self.day.get()
    }

    fn now(&self) -> Instant {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> Day {
        (**self).today()
    }

    fn now(&self) -> Instant {
        (**self).now()
    }
}
