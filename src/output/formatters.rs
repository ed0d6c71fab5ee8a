//! Formatting utilities for terminal output

use crate::core::{Feedback, GUESS_LIMIT, Word};
use chrono::{NaiveTime, Timelike};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for one guess-distribution bucket, scaled to the largest bucket
#[must_use]
pub fn distribution_bar(count: u32, max: u32, width: usize) -> String {
    create_progress_bar(f64::from(count), f64::from(max), width)
}

/// Time left until local midnight as `HH:MM:SS`
#[must_use]
pub fn countdown(now: NaiveTime) -> String {
    let remaining = 86_399 - now.num_seconds_from_midnight().min(86_399);
    format!(
        "{:02}:{:02}:{:02}",
        remaining / 3600,
        remaining / 60 % 60,
        remaining % 60
    )
}

/// Summary line for a finished game
#[must_use]
pub fn outcome_message(solved: bool, guesses: usize) -> String {
    if solved {
        let turns = if guesses > 1 { "turns" } else { "turn" };
        format!("You guessed it in {guesses} {turns}!")
    } else {
        "You failed to guess the word.".to_string()
    }
}

/// Celebration for a win after `guesses` turns
#[must_use]
pub const fn praise(guesses: usize) -> &'static str {
    match guesses {
        1 => "Genius!",
        2 => "Magnificent!",
        3 => "Impressive!",
        4 => "Splendid!",
        5 => "Great!",
        _ => "Phew!",
    }
}

/// Share text for a set of rows
///
/// # Examples
/// ```
/// use rewordle::core::{Feedback, Word};
/// use rewordle::output::formatters::share_text;
///
/// let answer = Word::new("crane").unwrap();
/// let guess = Word::new("slate").unwrap();
/// let rows = vec![
///     (guess.clone(), Feedback::evaluate(&guess, &answer)),
///     (answer.clone(), Feedback::PERFECT),
/// ];
///
/// let text = share_text("Rewordle", "ffk", &rows, None);
/// assert_eq!(text, "Rewordle #ffk 2/6\n\n⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_text(title: &str, code: &str, rows: &[(Word, Feedback)], link: Option<&str>) -> String {
    let mut lines = vec![format!("{title} #{code} {}/{GUESS_LIMIT}", rows.len())];
    lines.push(String::new());
    lines.extend(rows.iter().map(|(_, feedback)| feedback.to_emoji()));
    if let Some(link) = link {
        lines.push(String::new());
        lines.push(link.to_string());
    }
    lines.join("\n")
}
