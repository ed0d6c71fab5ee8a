//! Daily game engine
//!
//! [`Game`] owns one day's state, evaluates guesses, persists progress through a
//! [`Storage`](crate::storage::Storage) and counts finished games in the statistics.
//! Adapters feed it input, call [`Game::tick`] to run the feedback timers, and read what
//! happened from [`Game::drain_events`].

mod engine;
mod events;
mod keyboard;
mod record;
mod timer;

pub use engine::{FLIP_DELAY, Game, GameConfig, GuessOutcome, Phase, SHAKE_DELAY};
pub use events::GameEvent;
pub use keyboard::KeyboardState;
pub use record::{GameRecord, STATE_KEY};
pub use timer::Scheduler;
