//! Command implementations

pub mod share;
pub mod simple;
pub mod stats;

pub use share::share_game;
pub use simple::{play_lines, run_simple};
pub use stats::run_stats;
