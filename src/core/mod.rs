//! Core domain types for the daily game
//!
//! Words, per-letter feedback, day indexing and time sources. Everything here is pure apart
//! from the system clock.

mod clock;
mod day;
mod feedback;
mod word;

pub use clock::{Clock, ManualClock, SystemClock};
pub use day::Day;
pub use feedback::{Feedback, LetterState};
pub use word::{WORD_LENGTH, Word, WordError};

/// Maximum number of guesses per game
pub const GUESS_LIMIT: usize = 6;
