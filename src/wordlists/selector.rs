//! Daily answer selection
//!
//! The answer list is shuffled once with a fixed seed; day `n` takes the entry at
//! `n mod len` of that order. The mapping is total and stable for as long as the list and
//! the seed stay the same.

use crate::core::{Day, Word};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use thiserror::Error;

/// Seed for the answer order ("REWORDLE")
pub const ANSWER_SEED: u64 = 0x5245_574f_5244_4c45;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("answer list is empty")]
    NoAnswers,
}

/// Maps a day index to its answer
#[derive(Debug, Clone)]
pub struct AnswerSelector {
    answers: Vec<Word>,
    order: Vec<usize>,
}

impl AnswerSelector {
    /// Build a selector with the default seed
    ///
    /// # Errors
    /// Returns `SelectorError::NoAnswers` if `answers` is empty.
    pub fn new(answers: Vec<Word>) -> Result<Self, SelectorError> {
        Self::with_seed(answers, ANSWER_SEED)
    }

    /// Build a selector with an explicit seed
    ///
    /// # Errors
    /// Returns `SelectorError::NoAnswers` if `answers` is empty.
    pub fn with_seed(answers: Vec<Word>, seed: u64) -> Result<Self, SelectorError> {
        if answers.is_empty() {
            return Err(SelectorError::NoAnswers);
        }

        let mut order: Vec<usize> = (0..answers.len()).collect();
        order.shuffle(&mut StdRng::seed_from_u64(seed));

        Ok(Self { answers, order })
    }

    /// Answer for `day`
    ///
    /// # Examples
    /// ```
    /// use rewordle::core::{Day, Word};
    /// use rewordle::wordlists::AnswerSelector;
    ///
    /// let answers = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
    /// let selector = AnswerSelector::new(answers).unwrap();
    ///
    /// let day = Day::new(19_000);
    /// assert_eq!(selector.answer_for(day), selector.answer_for(day));
    /// ```
    #[must_use]
    pub fn answer_for(&self, day: Day) -> &Word {
        let slot = day.index() as usize % self.order.len();
        &self.answers[self.order[slot]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn selector() -> AnswerSelector {
        AnswerSelector::new(words_from_slice(&["crane", "slate", "allow", "melon", "fuzzy"]))
            .unwrap()
    }

    #[test]
    fn empty_list_rejected() {
        assert_eq!(
            AnswerSelector::new(Vec::new()).unwrap_err(),
            SelectorError::NoAnswers
        );
    }

    #[test]
    fn same_day_same_answer() {
        let a = selector();
        let b = selector();
        for index in 0..50 {
            let day = Day::new(index);
            assert_eq!(a.answer_for(day), b.answer_for(day));
        }
    }

    #[test]
    fn wraps_modulo_list_size() {
        let s = selector();
        assert_eq!(s.answer_for(Day::new(3)), s.answer_for(Day::new(3 + 5)));
        assert_eq!(s.answer_for(Day::new(u32::MAX)), s.answer_for(Day::new(u32::MAX % 5)));
    }

    #[test]
    fn one_cycle_visits_every_answer() {
        let s = selector();
        let mut seen: Vec<_> = (0..5).map(|i| s.answer_for(Day::new(i)).text()).collect();
        seen.sort_unstable();
        assert_eq!(seen, ["allow", "crane", "fuzzy", "melon", "slate"]);
    }
}
