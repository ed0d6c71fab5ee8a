//! Interactive TUI
//!
//! Full-screen front end built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Outcome, Reveal, run_tui};
