//! Terminal output formatting
//!
//! Text builders shared by every front end, plus colored printing for the line-based commands.

pub mod display;
pub mod formatters;

pub use display::{print_answer, print_outcome, print_row, print_stats};
pub use formatters::{countdown, outcome_message, share_text};
