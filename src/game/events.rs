//! Notifications from the engine to its adapters

use crate::core::{Day, Feedback, Word};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A game was loaded or started
    Loaded { day: Day, practice: bool },
    /// The in-progress guess changed
    CurrentGuessUpdated { row: usize, guess: String },
    /// A row received feedback; `instant` rows are replays and skip the reveal animation
    GuessEvaluated {
        row: usize,
        word: Word,
        feedback: Feedback,
        instant: bool,
    },
    /// A submission was rejected: too short or not in the dictionary
    InvalidSubmission { row: usize, guess: String },
    /// The rejection cue for `row` has run its course
    ShakeCleared { row: usize },
    /// Input is accepted again after a reveal
    Ready { row: usize },
    /// Progress could not be written to the store
    SaveFailed { error: String },
    /// The game is over
    Finished {
        solved: bool,
        answer: Word,
        guesses: usize,
    },
}
