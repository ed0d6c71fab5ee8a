//! Per-letter guess feedback
//!
//! Evaluation follows the usual duplicate-letter rules:
//! 1. First pass: every exact position match is `Correct`
//! 2. Second pass: each remaining guess letter, left to right, claims the leftmost answer
//!    position holding the same letter that is neither `Correct` nor already claimed
//!
//! A guess letter is therefore marked `Valid` at most as many times as it has unmatched
//! occurrences in the answer.

use super::word::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for a single letter
///
/// Variants are declared in display priority order, so `Ord` can be used to merge the
/// feedback of several guesses onto one keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterState {
    /// Answer tile of a game that was not solved
    Wrong,
    /// Nothing known yet
    #[serde(rename = "none")]
    Empty,
    /// Letter does not occur in the answer
    Invalid,
    /// Letter occurs in the answer at a different position
    Valid,
    /// Letter is in the correct position
    Correct,
}

impl LetterState {
    /// Share glyph for this state
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Valid => '🟨',
            Self::Wrong | Self::Empty | Self::Invalid => '⬜',
        }
    }

    /// Keep whichever of the two states has the higher display priority
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }
}

/// Feedback for a whole guess, one state per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback([LetterState; WORD_LENGTH]);

impl Feedback {
    /// All letters in the correct position
    pub const PERFECT: Self = Self([LetterState::Correct; WORD_LENGTH]);

    /// Evaluate `guess` against `answer`
    ///
    /// # Examples
    /// ```
    /// use rewordle::core::{Feedback, LetterState::*, Word};
    ///
    /// let answer = Word::new("melon").unwrap();
    /// let guess = Word::new("llama").unwrap();
    ///
    /// let feedback = Feedback::evaluate(&guess, &answer);
    /// assert_eq!(feedback.states(), &[Valid, Invalid, Invalid, Valid, Invalid]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.chars();
        let answer = answer.chars();
        let mut states = [LetterState::Invalid; WORD_LENGTH];
        let mut claimed = [false; WORD_LENGTH];

        // Exact matches
        for i in 0..WORD_LENGTH {
            if guess[i] == answer[i] {
                states[i] = LetterState::Correct;
                claimed[i] = true;
            }
        }

        // Misplaced letters, leftmost unclaimed answer position wins
        for i in 0..WORD_LENGTH {
            if states[i] == LetterState::Correct {
                continue;
            }
            if let Some(j) = (0..WORD_LENGTH).find(|&j| !claimed[j] && answer[j] == guess[i]) {
                states[i] = LetterState::Valid;
                claimed[j] = true;
            }
        }

        Self(states)
    }

    /// Per-position states
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.0
    }

    /// State at a position (0-4)
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> LetterState {
        self.0[position]
    }

    /// Check if every letter is `Correct`
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Render as a row of share glyphs, e.g. "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|state| state.glyph()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
