//! Persisted per-day game record

use crate::core::{Day, GUESS_LIMIT, Word};
use serde::{Deserialize, Serialize};

/// Storage key for the current day's game
pub const STATE_KEY: &str = "state";

/// Everything needed to restore a day's game
///
/// Saved as one JSON value, so the fields are always written together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub day: Day,
    pub answer: Word,
    pub guesses: Vec<Word>,
    pub solved: bool,
}

impl GameRecord {
    /// Check the record describes a reachable game
    ///
    /// At most six guesses; `solved` holds exactly when the last guess, and only the last,
    /// is the answer.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.guesses.len() > GUESS_LIMIT {
            return false;
        }
        let first_hit = self.guesses.iter().position(|g| *g == self.answer);
        match first_hit {
            Some(index) => self.solved && index + 1 == self.guesses.len(),
            None => !self.solved,
        }
    }
}
