//! Rewordle
//!
//! A daily five-letter word game: one answer per calendar day, six guesses, per-letter
//! feedback, saved progress and lifetime statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use rewordle::core::{Day, ManualClock};
//! use rewordle::game::{Game, GameConfig, GuessOutcome};
//! use rewordle::storage::{MemoryStore, Storage};
//! use rewordle::wordlists::{Dictionary, loader::words_from_slice};
//!
//! let dictionary = Dictionary::new(
//!     words_from_slice(&["crane"]),
//!     words_from_slice(&["slate"]),
//! )
//! .unwrap();
//! let clock = ManualClock::new(Day::new(1));
//! let storage = Storage::new("rewordle", MemoryStore::default());
//!
//! let mut game = Game::new(&dictionary, storage, &clock).with_config(GameConfig::instant());
//! game.load();
//!
//! assert!(matches!(game.make_guess("slate"), GuessOutcome::Accepted(_)));
//! game.tick();
//! assert!(matches!(game.make_guess("crane"), GuessOutcome::Accepted(_)));
//! assert!(game.is_solved());
//! ```

// Application configuration
pub mod config;

// Core domain types
pub mod core;

// Daily game engine
pub mod game;

// Lifetime statistics
pub mod stats;

// Key/value persistence
pub mod storage;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
