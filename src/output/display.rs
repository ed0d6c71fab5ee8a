//! Colored printing for the line-based commands

use super::formatters::{distribution_bar, outcome_message, praise};
use crate::core::{Feedback, LetterState, Word};
use crate::stats::{StatKind, Stats};
use colored::{ColoredString, Colorize};

/// One letter as a colored tile
#[must_use]
pub fn tile(letter: char, state: LetterState) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Valid => text.black().on_yellow().bold(),
        LetterState::Invalid => text.white().on_bright_black().bold(),
        LetterState::Wrong => text.white().on_red().bold(),
        LetterState::Empty => text.normal(),
    }
}

/// A submitted row with its feedback
pub fn print_row(row: usize, word: &Word, feedback: &Feedback) {
    let tiles: String = word
        .text()
        .chars()
        .zip(feedback.states())
        .map(|(letter, state)| tile(letter, *state).to_string())
        .collect();
    println!("  {} {tiles}", (row + 1).to_string().bright_black());
}

/// The answer revealed after a game ends
///
/// Tiles are green when solved and red otherwise.
pub fn print_answer(answer: &Word, solved: bool) {
    let state = if solved {
        LetterState::Correct
    } else {
        LetterState::Wrong
    };
    let tiles: String = answer
        .text()
        .chars()
        .map(|letter| tile(letter, state).to_string())
        .collect();
    println!("    {tiles}");
}

pub fn print_outcome(solved: bool, guesses: usize, answer: &Word) {
    println!("\n{}", "─".repeat(40).cyan());
    if solved {
        println!("{}", praise(guesses).bright_yellow().bold());
        println!("{}", outcome_message(solved, guesses).green().bold());
    } else {
        println!("{}", outcome_message(solved, guesses).red().bold());
    }
    print_answer(answer, solved);
    println!("{}", "─".repeat(40).cyan());
}

/// Print the statistics panel
///
/// `highlight` marks the distribution bucket of the game just finished.
pub fn print_stats(stats: &Stats, highlight: Option<usize>) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    for kind in StatKind::ALL {
        println!(
            "   {:<16}{}",
            kind.label(),
            stats.value(kind).to_string().bright_yellow().bold()
        );
    }

    println!("\n {} ", "GUESS DISTRIBUTION".bright_cyan().bold());
    let max = stats.max_bucket();
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = distribution_bar(count, max, 24);
        let bar = if highlight == Some(i) {
            bar.green()
        } else {
            bar.bright_black()
        };
        println!("   {}: {bar} {count}", i + 1);
    }
}
