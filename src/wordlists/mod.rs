//! Dictionaries for the daily game
//!
//! Two lists are embedded: the answers, from which one word is chosen per day, and a larger
//! set of extra words that are accepted as guesses but never chosen.

mod embedded;
pub mod loader;
mod selector;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use selector::{ANSWER_SEED, AnswerSelector, SelectorError};

use crate::core::{Day, Word};
use loader::words_from_slice;
use rustc_hash::FxHashSet;

/// Answer selector plus the set of accepted guesses
///
/// The guess set always contains every answer.
#[derive(Debug, Clone)]
pub struct Dictionary {
    selector: AnswerSelector,
    guesses: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from an answer list and extra accepted guesses
    ///
    /// # Errors
    /// Returns `SelectorError::NoAnswers` if `answers` is empty.
    pub fn new(
        answers: Vec<Word>,
        extra_guesses: impl IntoIterator<Item = Word>,
    ) -> Result<Self, SelectorError> {
        let mut guesses: FxHashSet<String> = answers.iter().map(|w| w.text().to_string()).collect();
        guesses.extend(extra_guesses.into_iter().map(String::from));

        Ok(Self {
            selector: AnswerSelector::new(answers)?,
            guesses,
        })
    }

    /// The dictionary compiled into the binary
    ///
    /// # Errors
    /// Returns `SelectorError::NoAnswers` if the embedded answer list is empty.
    pub fn embedded() -> Result<Self, SelectorError> {
        Self::new(words_from_slice(ANSWERS), words_from_slice(ALLOWED))
    }

    /// Add more accepted guesses
    pub fn extend_guesses(&mut self, words: impl IntoIterator<Item = Word>) {
        self.guesses.extend(words.into_iter().map(String::from));
    }

    /// Check whether `word` is accepted as a guess
    ///
    /// # Examples
    /// ```
    /// use rewordle::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::embedded().unwrap();
    /// assert!(dictionary.is_valid_guess("crane"));
    /// assert!(!dictionary.is_valid_guess("xxxxx"));
    /// ```
    #[must_use]
    pub fn is_valid_guess(&self, word: &str) -> bool {
        self.guesses.contains(word)
    }

    /// Answer for `day`
    #[must_use]
    pub fn answer_for(&self, day: Day) -> &Word {
        self.selector.answer_for(day)
    }

    /// Number of accepted guesses, answers included
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }
}
