//! The daily game state machine
//!
//! ```text
//! Loading -> Active <-> Evaluating -> Finished
//! ```
//!
//! An accepted guess moves the game to `Evaluating` while the adapter reveals the row. The
//! reveal timer, driven through [`Game::tick`], then returns it to `Active` or ends it.

use super::events::GameEvent;
use super::keyboard::KeyboardState;
use super::record::{GameRecord, STATE_KEY};
use super::timer::Scheduler;
use crate::core::{Clock, Day, Feedback, GUESS_LIMIT, SystemClock, WORD_LENGTH, Word};
use crate::stats::{STATS_KEY, Stats};
use crate::storage::{KeyValueStore, Storage, StoreError};
use crate::wordlists::Dictionary;
use std::mem;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Delay between revealing consecutive tiles
pub const FLIP_DELAY: Duration = Duration::from_millis(500);

/// How long the rejected-input cue lasts
pub const SHAKE_DELAY: Duration = Duration::from_millis(800);

/// Engine timings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Input stays blocked this long after an accepted guess
    pub feedback_delay: Duration,
    pub shake_delay: Duration,
}

impl GameConfig {
    /// No delays; reveals complete on the next tick
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            feedback_delay: Duration::ZERO,
            shake_delay: Duration::ZERO,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            feedback_delay: FLIP_DELAY.saturating_mul(WORD_LENGTH as u32),
            shake_delay: SHAKE_DELAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Active,
    Evaluating,
    Finished,
}

/// Result of [`Game::make_guess`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Input is blocked or the game is over; nothing changed
    Ignored,
    /// Too short or not in the dictionary; no guess was used
    Rejected,
    Accepted(Feedback),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKey {
    Reveal(usize),
    Shake(usize),
}

#[derive(Debug, Clone, Copy)]
enum Task {
    FinishReveal { day: Day, row: usize },
    ClearShake { day: Day, row: usize },
}

/// One day's game
pub struct Game<'a, S: KeyValueStore, C: Clock = SystemClock> {
    dictionary: &'a Dictionary,
    storage: Storage<S>,
    clock: C,
    config: GameConfig,
    timers: Scheduler<TimerKey, Task>,
    events: Vec<GameEvent>,
    phase: Phase,
    day: Day,
    answer: Word,
    guesses: Vec<Word>,
    current_guess: String,
    solved: bool,
    persistent: bool,
    shaking: bool,
}

impl<'a, S: KeyValueStore, C: Clock> Game<'a, S, C> {
    /// Create an engine in the `Loading` phase; call [`Game::load`] before playing
    pub fn new(dictionary: &'a Dictionary, storage: Storage<S>, clock: C) -> Self {
        let day = clock.today();
        Self {
            dictionary,
            storage,
            config: GameConfig::default(),
            timers: Scheduler::default(),
            events: Vec::new(),
            phase: Phase::Loading,
            answer: dictionary.answer_for(day).clone(),
            day,
            clock,
            guesses: Vec::new(),
            current_guess: String::new(),
            solved: false,
            persistent: true,
            shaking: false,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Load today's game, restoring saved progress for the same day
    pub fn load(&mut self) {
        self.persistent = true;
        self.start_day(self.clock.today());
    }

    /// Load the game addressed by a base-36 day code
    ///
    /// A past day starts a practice game that is never saved. Today, a future day, or a code
    /// that does not parse loads today's game.
    pub fn load_code(&mut self, code: Option<&str>) {
        let today = self.clock.today();
        let requested = code.and_then(|c| {
            let day = Day::from_code(c);
            if day.is_none() {
                warn!(code = c, "ignoring unreadable day code");
            }
            day
        });

        match requested {
            Some(day) if day < today => {
                info!(day = %day.code(), "starting practice game");
                self.persistent = false;
                self.start_day(day);
            }
            Some(day) => {
                if day > today {
                    debug!(day = %day.code(), today = %today.code(), "clamping future day");
                }
                self.load();
            }
            None => self.load(),
        }
    }

    /// Start today's game over with no guesses and save it
    ///
    /// # Errors
    /// Returns an error if the fresh state cannot be saved.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.timers.cancel_all();
        self.shaking = false;
        self.start_fresh(self.day);
        self.phase = Phase::Active;
        self.events.push(GameEvent::Loaded {
            day: self.day,
            practice: !self.persistent,
        });
        self.save()
    }

    fn start_day(&mut self, day: Day) {
        self.timers.cancel_all();
        self.shaking = false;
        self.current_guess.clear();

        let saved = if self.persistent {
            self.storage.try_get::<GameRecord>(STATE_KEY)
        } else {
            None
        };

        match saved {
            Some(record) if record.day == day && record.is_consistent() => {
                debug!(day = %day, guesses = record.guesses.len(), "restoring saved game");
                self.day = record.day;
                self.answer = record.answer;
                self.guesses = record.guesses;
                self.solved = record.solved;
            }
            Some(record) if record.day != day => {
                info!(saved = %record.day, today = %day, "new day, discarding saved game");
                self.start_fresh(day);
            }
            Some(_) => {
                warn!(day = %day, "saved game is inconsistent, starting fresh");
                self.start_fresh(day);
            }
            None => self.start_fresh(day),
        }

        self.phase = if self.is_finished() {
            Phase::Finished
        } else {
            Phase::Active
        };

        self.events.push(GameEvent::Loaded {
            day: self.day,
            practice: !self.persistent,
        });
        for (row, (word, feedback)) in self.rows().into_iter().enumerate() {
            self.events.push(GameEvent::GuessEvaluated {
                row,
                word,
                feedback,
                instant: true,
            });
        }
        if self.phase == Phase::Finished {
            self.push_finished();
        }
    }

    fn start_fresh(&mut self, day: Day) {
        self.day = day;
        self.answer = self.dictionary.answer_for(day).clone();
        self.guesses.clear();
        self.current_guess.clear();
        self.solved = false;
    }

    /// Replace the in-progress guess
    ///
    /// Ignored unless input is accepted. Keeps the first five ASCII letters, lowercased.
    pub fn update_current_guess(&mut self, word: &str) {
        if !self.is_active() {
            return;
        }

        self.current_guess = word
            .chars()
            .filter(char::is_ascii_alphabetic)
            .take(WORD_LENGTH)
            .map(|c| c.to_ascii_lowercase())
            .collect();

        self.events.push(GameEvent::CurrentGuessUpdated {
            row: self.guesses.len(),
            guess: self.current_guess.clone(),
        });
    }

    /// Append a letter to the in-progress guess
    pub fn push_letter(&mut self, letter: char) {
        if letter.is_ascii_alphabetic() {
            let mut next = self.current_guess.clone();
            next.push(letter);
            self.update_current_guess(&next);
        }
    }

    /// Remove the last letter of the in-progress guess
    pub fn pop_letter(&mut self) {
        let mut next = self.current_guess.clone();
        next.pop();
        self.update_current_guess(&next);
    }

    /// Submit the in-progress guess
    pub fn submit(&mut self) -> GuessOutcome {
        let guess = self.current_guess.clone();
        self.make_guess(&guess)
    }

    /// Evaluate `word` against the answer
    ///
    /// Returns `None` if `word` is shorter than five letters or not an accepted guess.
    #[must_use]
    pub fn check_word(&self, word: &str) -> Option<Feedback> {
        if word.len() < WORD_LENGTH || !self.dictionary.is_valid_guess(word) {
            return None;
        }
        let guess = Word::new(word).ok()?;
        Some(Feedback::evaluate(&guess, &self.answer))
    }

    /// Submit a guess
    ///
    /// A guess typed before local midnight and submitted after it is dropped, and the new
    /// day's game is loaded instead.
    pub fn make_guess(&mut self, word: &str) -> GuessOutcome {
        if self.roll_over() || !self.is_active() || self.guesses.len() >= GUESS_LIMIT {
            return GuessOutcome::Ignored;
        }

        let row = self.guesses.len();
        let Some((guess, feedback)) = self
            .check_word(word)
            .and_then(|feedback| Word::new(word).ok().map(|guess| (guess, feedback)))
        else {
            self.reject(row, word);
            return GuessOutcome::Rejected;
        };

        debug!(row, guess = %guess, feedback = %feedback, "guess accepted");
        self.solved = guess == self.answer;
        self.guesses.push(guess.clone());
        self.current_guess.clear();
        self.phase = Phase::Evaluating;

        let due = self.clock.now() + self.config.feedback_delay;
        self.timers.schedule(
            TimerKey::Reveal(row),
            due,
            Task::FinishReveal { day: self.day, row },
        );

        self.events.push(GameEvent::GuessEvaluated {
            row,
            word: guess,
            feedback,
            instant: false,
        });

        if let Err(err) = self.save() {
            error!(%err, "could not save game");
            self.events.push(GameEvent::SaveFailed {
                error: err.to_string(),
            });
        }

        GuessOutcome::Accepted(feedback)
    }

    fn reject(&mut self, row: usize, word: &str) {
        // A cue already running absorbs repeated rejections
        if self.shaking {
            return;
        }
        self.shaking = true;

        let due = self.clock.now() + self.config.shake_delay;
        self.timers.schedule(
            TimerKey::Shake(row),
            due,
            Task::ClearShake { day: self.day, row },
        );
        self.events.push(GameEvent::InvalidSubmission {
            row,
            guess: word.to_string(),
        });
    }

    /// Run expired timers; returns how many fired
    ///
    /// If the local date has changed since the game was loaded, pending timers are dropped
    /// and the new day's game is loaded first.
    pub fn tick(&mut self) -> usize {
        self.roll_over();
        let due = self.timers.take_due(self.clock.now());
        let fired = due.len();
        for task in due {
            self.run(task);
        }
        fired
    }

    /// Load the current day's game if the daily game loaded earlier has expired
    fn roll_over(&mut self) -> bool {
        let today = self.clock.today();
        if !self.persistent || self.phase == Phase::Loading || today == self.day {
            return false;
        }

        info!(from = %self.day, to = %today, "date changed, loading new game");
        self.start_day(today);
        true
    }

    /// When the next timer expires, if any is pending
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    fn run(&mut self, task: Task) {
        match task {
            Task::FinishReveal { day, row } => {
                let current = day == self.day
                    && self.phase == Phase::Evaluating
                    && row + 1 == self.guesses.len();
                if !current {
                    debug!(day = %day, row, "dropping stale reveal");
                    return;
                }

                if self.is_finished() {
                    self.phase = Phase::Finished;
                    self.push_finished();
                } else {
                    self.phase = Phase::Active;
                    self.events.push(GameEvent::Ready { row: row + 1 });
                }
            }
            Task::ClearShake { day, row } => {
                if day == self.day {
                    self.shaking = false;
                    self.events.push(GameEvent::ShakeCleared { row });
                }
            }
        }
    }

    fn push_finished(&mut self) {
        info!(day = %self.day, solved = self.solved, guesses = self.guesses.len(), "game finished");
        self.events.push(GameEvent::Finished {
            solved: self.solved,
            answer: self.answer.clone(),
            guesses: self.guesses.len(),
        });
    }

    /// Persist the game, and count it in the stats the first time it is seen finished
    ///
    /// Does nothing for practice games.
    ///
    /// # Errors
    /// Returns an error if the store cannot be written.
    pub fn save(&mut self) -> Result<(), StoreError> {
        if !self.persistent {
            return Ok(());
        }

        self.storage.set(STATE_KEY, &self.record())?;

        if self.is_finished() {
            let mut stats = self.stats();
            if stats.record(self.day, self.solved, self.guesses.len()) {
                info!(day = %self.day, played = stats.games_played, "stats updated");
                self.storage.set(STATS_KEY, &stats)?;
            }
        }
        Ok(())
    }

    /// Snapshot of the persisted fields
    #[must_use]
    pub fn record(&self) -> GameRecord {
        GameRecord {
            day: self.day,
            answer: self.answer.clone(),
            guesses: self.guesses.clone(),
            solved: self.solved,
        }
    }

    /// Stored statistics, or empty stats if none are saved
    #[must_use]
    pub fn stats(&self) -> Stats {
        self.storage.get(STATS_KEY, Stats::default())
    }

    /// Take every event emitted since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.solved || self.guesses.len() >= GUESS_LIMIT
    }

    /// Whether a guess can be submitted right now
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn day(&self) -> Day {
        self.day
    }

    /// Base-36 label of the loaded day
    #[must_use]
    pub fn code(&self) -> String {
        self.day.code()
    }

    /// Practice games are never saved
    #[must_use]
    pub const fn is_practice(&self) -> bool {
        !self.persistent
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    #[must_use]
    pub const fn is_shaking(&self) -> bool {
        self.shaking
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    /// Submitted guesses with their feedback
    #[must_use]
    pub fn rows(&self) -> Vec<(Word, Feedback)> {
        self.guesses
            .iter()
            .map(|guess| (guess.clone(), Feedback::evaluate(guess, &self.answer)))
            .collect()
    }

    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        KeyboardState::from_rows(&self.rows())
    }

    #[must_use]
    pub const fn storage(&self) -> &Storage<S> {
        &self.storage
    }

    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Give back the store, e.g. to hand it to a new engine
    #[must_use]
    pub fn into_storage(self) -> Storage<S> {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterState, ManualClock};
    use crate::storage::MemoryStore;
    use crate::wordlists::loader::words_from_slice;

    const TODAY: Day = Day::new(19_000);

    fn dictionary() -> Dictionary {
        Dictionary::new(
            words_from_slice(&["crane", "allow", "fuzzy", "melon", "train"]),
            words_from_slice(&["slate", "adieu", "pious", "lymph", "stomp", "bring", "llama"]),
        )
        .unwrap()
    }

    fn storage() -> Storage<MemoryStore> {
        Storage::new("test", MemoryStore::default())
    }

    fn game<'a>(
        dictionary: &'a Dictionary,
        clock: &'a ManualClock,
        storage: Storage<MemoryStore>,
    ) -> Game<'a, MemoryStore, &'a ManualClock> {
        let mut game = Game::new(dictionary, storage, clock);
        game.load();
        game
    }

    /// A guess from the dictionary that is not the answer
    fn miss(game: &Game<'_, MemoryStore, &ManualClock>) -> &'static str {
        ["slate", "adieu"]
            .into_iter()
            .find(|w| *w != game.answer().text())
            .unwrap()
    }

    fn settle(game: &mut Game<'_, MemoryStore, &ManualClock>, clock: &ManualClock) {
        clock.advance(GameConfig::default().feedback_delay);
        game.tick();
    }

    #[test]
    fn fresh_game_uses_selector_answer() {
        let dictionary = dictionary();
        let clock = ManualClock::new(TODAY);
        let mut game = game(&dictionary, &clock, storage());

        assert_eq!(game.answer(), dictionary.answer_for(TODAY));
        assert!(game.is_active());
        assert!(game.guesses().is_empty());
        assert_eq!(
            game.drain_events(),
            [GameEvent::Loaded {
                day: TODAY,
                practice: false
            }]
        );
    }

    #[test]
    fn check_word_rejects_short_and_unknown() {
        let dictionary = dictionary();
        let clock = ManualClock::new(TODAY);
        let game = game(&dictionary, &clock, storage());

        assert_eq!(game.check_word("cran"), None);
        assert_eq!(game.check_word("zzzzz"), None);
        assert_eq!(game.check_word("cranes"), None);
        assert!(game.check_word("slate").is_some());
    }

    #[test]
    fn correct_guess_solves() {
        let dictionary = dictionary();
        let clock = ManualClock::new(TODAY);
        let mut game = game(&dictionary, &clock, storage());
        let answer = game.answer().text().to_string();

        assert_eq!(
            game.make_guess(&answer),
            GuessOutcome::Accepted(Feedback::PERFECT)
        );
        assert!(game.is_solved());
        assert!(game.is_finished());
        assert_eq!(game.phase(), Phase::Evaluating);

        settle(&mut game, &clock);
        assert_eq!(game.phase(), Phase::Finished);
        assert!(game.drain_events().contains(&GameEvent::Finished {
            solved: true,
            answer: Word::new(&answer).unwrap(),
            guesses: 1,
        }));
    }

    #[test]
    fn input_blocked_during_reveal() {
        let dictionary = dictionary();
        let clock = ManualClock::new(TODAY);
        let mut game = game(&dictionary, &clock, storage());
        let guess = miss(&game);

        assert!(matches!(game.make_guess(guess), GuessOutcome::Accepted(_)));
        assert_eq!(game.make_guess(guess), GuessOutcome::Ignored);

        game.update_current_guess("cra");
        assert_eq!(game.current_guess(), "");

        clock.advance(Duration::from_millis(100));
        assert_eq!(game.tick(), 0);
        assert!(!game.is_active());

        settle(&mut game, &clock);
        assert!(game.is_active());
        assert_eq!(game.guesses().len(), 1);
    }

    #[test]
    fn current_guess_capped_at_five_letters() {
        let dictionary = dictionary();
        let clock = ManualClock::new(TODAY);
        let mut game = game(&dictionary, &clock, storage());
        game.drain_events();

        game.update_current_guess("CRANES");
        assert_eq!(game.current_guess(), "crane");

        game.push_letter('x');
        assert_eq!(game.current_guess(), "crane");

        game.pop_letter();
        game.push_letter('1');
        assert_eq!(game.current_guess(), "cran");

        let events = game.drain_events();
        assert_eq!(
            events.last(),
            Some(&GameEvent::CurrentGuessUpdated {
                row: 0,
                guess: "cran".into()
            })
        );
    }

    #[test]
    fn rejected_guess_uses_no_turn() {
        let dictionary = dictionary();
        let clock = ManualClock::new(TODAY);
        let mut game = game(&dictionary, &clock, storage());
        game.drain_events();

        game.update_current_guess("zzzzz");
        assert_eq!(game.submit(), GuessOutcome::Rejected);
        assert_eq!(game.make_guess("cra"), GuessOutcome::Rejected);

        assert!(game.guesses().is_empty());
        assert!(game.is_active());
        assert!(game.is_shaking());

        let invalid = game
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::InvalidSubmission { .. }))
            .count();
        assert_eq!(invalid, 1, "second rejection absorbed by running cue");

        clock.advance(SHAKE_DELAY);
        game.tick();
        assert!(!game.is_shaking());
        assert_eq!(game.drain_events(), [GameEvent::ShakeCleared { row: 0 }]);
    }

    #[test]
    fn six_misses_end_the_game() {
        let dictionary = dictionary();
        let clock = ManualClock::new(TODAY);
        let mut game = game(&dictionary, &clock, storage());
        let guess = miss(&game);

        for _ in 0..GUESS_LIMIT {
            assert!(matches!(game.make_guess(guess), GuessOutcome::Accepted(_)));
            settle(&mut game, &clock);
        }

        assert!(game.is_finished());
        assert!(!game.is_solved());
        assert_eq!(game.phase(), Phase::Finished);

        let before = game.record();
        let answer = game.answer().text().to_string();
        assert_eq!(game.make_guess(&answer), GuessOutcome::Ignored);
        assert_eq!(game.record(), before);
    }

    #[test]
    fn reload_restores_same_day() {
        let dictionary = dictionary();
        let clock = ManualClock::new(TODAY);
        let mut first = game(&dictionary, &clock, storage());
        let guess = miss(&first);
        first.make_guess(guess);
        settle(&mut first, &clock);
        first.make_guess("pious");
        let rows = first.rows();
        let record = first.record();

        let mut second = game(&dictionary, &clock, first.into_storage());
        assert_eq!(second.record(), record);
        assert_eq!(second.rows(), rows);
        assert!(second.is_active(), "reload mid-reveal is playable");

        let replayed: Vec<_> = second
            .drain_events()
            .into_iter()
            .filter_map(|e| match e {
                GameEvent::GuessEvaluated {
                    feedback, instant, ..
                } => Some((feedback, instant)),
                _ => None,
            })
            .collect();
        assert_eq!(replayed.len(), 2);
        assert!(replayed.iter().all(|(_, instant)| *instant));
        assert_eq!(replayed[0].0, rows[0].1);
    }

    #[test]
    fn day_rollover_starts_fresh() {
        let dictionary = dictionary();
        let clock = ManualClock::new(TODAY);
        let mut first = game(&dictionary, &clock, storage());
        first.make_guess(miss(&first));

        clock.set_day(TODAY.next());
        let second = game(&dictionary, &clock, first.into_storage());

        assert_eq!(second.day(), TODAY.next());
        assert!(second.guesses().is_empty());
        assert_eq!(second.answer(), dictionary.answer_for(TODAY.next()));
    }

    #[test]
    fn midnight_during_reveal_loads_new_day() {
        let dictionary = dictionary();
        let clock = ManualClock::new(TODAY);
        let mut game = game(&dictionary, &clock, storage());
        game.make_guess(miss(&game));
        game.drain_events();

        clock.set_day(TODAY.next());
        settle(&mut game, &clock);

        assert_eq!(game.day(), TODAY.next());
        assert_eq!(game.answer(), dictionary.answer_for(TODAY.next()));
        assert!(game.guesses().is_empty());
        assert!(game.is_active());
        assert_eq!(
            game.drain_events(),
            [GameEvent::Loaded {
                day: TODAY.next(),
                practice: false
            }]
        );
    }

    #[test]
    fn guess_after_midnight_goes_to_new_day() {
        let dictionary = dictionary();
        let clock = ManualClock::new(TODAY);
        let mut game = game(&dictionary, &clock, storage());
        let guess = miss(&game);
        game.make_guess(guess);
        settle(&mut game, &clock);

        clock.set_day(TODAY.next());
        assert_eq!(game.make_guess(guess), GuessOutcome::Ignored);
        assert_eq!(game.day(), TODAY.next());
        assert!(game.guesses().is_empty());

        assert!(matches!(game.make_guess(guess), GuessOutcome::Accepted(_)));
        let saved = game.storage().try_get::<GameRecord>(STATE_KEY).unwrap();
        assert_eq!(saved.day, TODAY.next());
        assert_eq!(saved.guesses.len(), 1);
    }

    #[test]
    fn practice_game_survives_midnight() {
        let dictionary = dictionary();
        let clock = ManualClock::new(TODAY);
        let mut game = Game::new(&dictionary, storage(), &clock);
        let past = Day::new(TODAY.index() - 3);
        game.load_code(Some(past.code().as_str()));

        clock.set_day(TODAY.next());
        game.tick();
        assert_eq!(game.day(), past);
        assert!(game.is_practice());
    }

    /// Substrate whose writes always fail
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get_item(&self, _id: &str) -> Option<String> {
            None
        }

        fn set_item(&mut self, _id: &str, _value: String) -> Result<(), StoreError> {
            Err(std::io::Error::other("read-only").into())
        }

        fn remove_item(&mut self, _id: &str) -> Result<(), StoreError> {
            Err(std::io::Error::other("read-only").into())
        }
    }

    #[test]
    fn failed_save_is_reported() {
        let dictionary = dictionary();
        let clock = ManualClock::new(TODAY);
        let mut game = Game::new(&dictionary, Storage::new("test", ReadOnlyStore), &clock);
        game.load();
        game.drain_events();

        assert!(matches!(game.make_guess("slate"), GuessOutcome::Accepted(_)));
        let events = game.drain_events();
        assert!(matches!(events.last(), Some(GameEvent::SaveFailed { .. })));
        assert_eq!(game.guesses().len(), 1, "play continues after a failed save");
    }

    #[test]
    fn load_cancels_pending_reveal() {
        let dictionary = dictionary();
        let clock = ManualClock::new(TODAY);
        let mut game = game(&dictionary, &clock, storage());
        let guess = miss(&game);
        game.make_guess(guess);

        clock.set_day(TODAY.next());
        game.load();
        game.make_guess(guess);
        game.drain_events();

        // Only the new day's reveal is pending; it fires once
        settle(&mut game, &clock);
        assert_eq!(game.drain_events(), [GameEvent::Ready { row: 1 }]);
    }

    #[test]
    fn stats_counted_once() {
        let dictionary = dictionary();
        let clock = ManualClock::new(TODAY);
        let mut first = game(&dictionary, &clock, storage());
        let answer = first.answer().text().to_string();
        first.make_guess(miss(&first));
        settle(&mut first, &clock);
        first.make_guess(&answer);
        settle(&mut first, &clock);

        let stats = first.stats();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution, [0, 1, 0, 0, 0, 0]);

        first.save().unwrap();
        let mut second = game(&dictionary, &clock, first.into_storage());
        assert_eq!(second.phase(), Phase::Finished);
        second.save().unwrap();
        second.load();
        second.save().unwrap();

        assert_eq!(second.stats(), stats);
    }

    #[test]
    fn unsolved_game_counts_in_last_bucket() {
        let dictionary = dictionary();
        let clock = ManualClock::new(TODAY);
        let mut game = game(&dictionary, &clock, storage());
        let guess = miss(&game);
        for _ in 0..GUESS_LIMIT {
            game.make_guess(guess);
            settle(&mut game, &clock);
        }

        let stats = game.stats();
        assert_eq!(stats.games_won, 0);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.guess_distribution, [0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn practice_day_never_saves() {
        let dictionary = dictionary();
        let clock = ManualClock::new(TODAY);
        let mut game = Game::new(&dictionary, storage(), &clock);
        let past = Day::new(TODAY.index() - 3);

        game.load_code(Some(past.code().as_str()));
        assert!(game.is_practice());
        assert_eq!(game.day(), past);
        assert_eq!(game.answer(), dictionary.answer_for(past));

        let answer = game.answer().text().to_string();
        game.make_guess(&answer);
        assert!(game.storage().backend().is_empty());
        assert_eq!(game.stats(), Stats::default());
    }

    #[test]
    fn future_and_bad_codes_load_today() {
        let dictionary = dictionary();
        let clock = ManualClock::new(TODAY);
        let mut game = Game::new(&dictionary, storage(), &clock);

        game.load_code(Some(TODAY.next().code().as_str()));
        assert_eq!(game.day(), TODAY);
        assert!(!game.is_practice());

        game.load_code(Some("not a code"));
        assert_eq!(game.day(), TODAY);
        assert!(!game.is_practice());
    }

    #[test]
    fn corrupt_state_starts_fresh() {
        let dictionary = dictionary();
        let clock = ManualClock::new(TODAY);
        let mut storage = storage();
        storage
            .backend_mut()
            .set_item("test.state", "{\"day\": \"garbage\"".into())
            .unwrap();

        let game = game(&dictionary, &clock, storage);
        assert!(game.guesses().is_empty());
        assert!(game.is_active());
    }

    #[test]
    fn inconsistent_state_starts_fresh() {
        let dictionary = dictionary();
        let clock = ManualClock::new(TODAY);
        let mut storage = storage();
        let record = GameRecord {
            day: TODAY,
            answer: Word::new("crane").unwrap(),
            guesses: Vec::new(),
            solved: true,
        };
        storage.set(STATE_KEY, &record).unwrap();

        let game = game(&dictionary, &clock, storage);
        assert!(!game.is_solved());
        assert!(game.is_active());
    }

    #[test]
    fn reset_clears_guesses() {
        let dictionary = dictionary();
        let clock = ManualClock::new(TODAY);
        let mut game = game(&dictionary, &clock, storage());
        game.make_guess(miss(&game));

        game.reset().unwrap();
        assert!(game.guesses().is_empty());
        assert!(game.is_active());
        assert_eq!(game.storage().try_get::<GameRecord>(STATE_KEY), Some(game.record()));
    }

    #[test]
    fn keyboard_reflects_rows() {
        let dictionary = dictionary();
        let clock = ManualClock::new(TODAY);
        let mut game = game(&dictionary, &clock, storage());
        let answer = game.answer().clone();

        game.make_guess(answer.text());
        assert_eq!(game.keyboard().get(answer.char_at(0)), LetterState::Correct);
    }
}
