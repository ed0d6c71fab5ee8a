//! Per-letter keyboard state aggregated across guesses

use crate::core::{Feedback, LetterState, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// Best known state for each letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<u8, LetterState>,
}

impl KeyboardState {
    /// Merge every row; a key keeps the highest-priority state it has seen
    ///
    /// # Examples
    /// ```
    /// use rewordle::core::{Feedback, LetterState, Word};
    /// use rewordle::game::KeyboardState;
    ///
    /// let answer = Word::new("allow").unwrap();
    /// let rows: Vec<_> = ["melon", "llama"]
    ///     .iter()
    ///     .map(|g| {
    ///         let guess = Word::new(*g).unwrap();
    ///         let feedback = Feedback::evaluate(&guess, &answer);
    ///         (guess, feedback)
    ///     })
    ///     .collect();
    ///
    /// let keyboard = KeyboardState::from_rows(&rows);
    /// assert_eq!(keyboard.get(b'l'), LetterState::Correct);
    /// assert_eq!(keyboard.get(b'z'), LetterState::Empty);
    /// ```
    #[must_use]
    pub fn from_rows(rows: &[(Word, Feedback)]) -> Self {
        let mut state = Self::default();
        for (word, feedback) in rows {
            state.apply(word, feedback);
        }
        state
    }

    pub fn apply(&mut self, word: &Word, feedback: &Feedback) {
        for i in 0..WORD_LENGTH {
            let entry = self
                .letters
                .entry(word.char_at(i))
                .or_insert(LetterState::Empty);
            *entry = entry.merge(feedback.at(i));
        }
    }

    /// State for `letter` (lowercase ASCII); `Empty` if never guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> LetterState {
        self.letters
            .get(&letter.to_ascii_lowercase())
            .copied()
            .unwrap_or(LetterState::Empty)
    }
}
