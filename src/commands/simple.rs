//! Simple line-based mode
//!
//! Plays the daily game without the TUI: one guess per line, colored rows printed as they
//! are evaluated.

use crate::core::{Clock, GUESS_LIMIT, WORD_LENGTH};
use crate::game::{Game, GameEvent};
use crate::output::{print_outcome, print_row, print_stats, share_text};
use crate::storage::KeyValueStore;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::error;

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Quit,
    Reset,
    Guess(String),
}

fn parse_input(line: &str) -> Option<Input> {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "" => None,
        "quit" | "q" | "exit" => Some(Input::Quit),
        "reset" => Some(Input::Reset),
        guess => Some(Input::Guess(guess.to_string())),
    }
}

/// Run the simple mode on stdin
///
/// The game must already be loaded.
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_simple<S: KeyValueStore, C: Clock>(
    game: &mut Game<'_, S, C>,
    title: &str,
    link: Option<&str>,
) -> io::Result<()> {
    println!("\n╔════════════════════════════════════════╗");
    println!("║{:^40}║", format!("{title} #{}", game.code()));
    println!("╚════════════════════════════════════════╝\n");
    println!("Guess the five-letter word in {GUESS_LIMIT} tries.");
    println!("Commands: 'quit' to exit, 'reset' to start today's game over\n");

    let stdin = io::stdin();
    play_lines(game, stdin.lock(), title, link)
}

/// Drive the game from `input` until it ends, the input runs out, or the player quits
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn play_lines<S: KeyValueStore, C: Clock, R: BufRead>(
    game: &mut Game<'_, S, C>,
    mut input: R,
    title: &str,
    link: Option<&str>,
) -> io::Result<()> {
    loop {
        game.tick();
        if report(game, title, link) {
            return Ok(());
        }

        print!("Guess {}/{GUESS_LIMIT}: ", game.guesses().len() + 1);
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }

        match parse_input(&line) {
            None => {}
            Some(Input::Quit) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Some(Input::Reset) => {
                if game.is_practice() {
                    println!("{}", "Practice games cannot be reset.".yellow());
                } else if let Err(err) = game.reset() {
                    error!(%err, "could not reset game");
                    println!("{}", format!("Reset failed: {err}").red());
                } else {
                    println!("{}", "Starting over.".cyan());
                }
            }
            Some(Input::Guess(guess)) => {
                game.make_guess(&guess);
            }
        }
    }
}

/// Print pending events; returns true once the game is over
fn report<S: KeyValueStore, C: Clock>(
    game: &mut Game<'_, S, C>,
    title: &str,
    link: Option<&str>,
) -> bool {
    let mut finished = None;
    for event in game.drain_events() {
        match event {
            GameEvent::Loaded { practice: true, .. } => {
                println!("{}", "Practice game: progress is not saved.".yellow());
            }
            GameEvent::GuessEvaluated {
                row,
                word,
                feedback,
                ..
            } => print_row(row, &word, &feedback),
            GameEvent::InvalidSubmission { guess, .. } => {
                let reason = if guess.chars().count() < WORD_LENGTH {
                    "Not enough letters"
                } else {
                    "Not in word list"
                };
                println!("  {}", reason.red());
            }
            GameEvent::SaveFailed { error } => {
                println!("  {}", format!("Progress not saved: {error}").red());
            }
            GameEvent::Finished {
                solved,
                answer,
                guesses,
            } => finished = Some((solved, answer, guesses)),
            _ => {}
        }
    }

    let Some((solved, answer, guesses)) = finished else {
        return false;
    };

    print_outcome(solved, guesses, &answer);
    if !game.is_practice() {
        let highlight = solved.then(|| guesses - 1);
        print_stats(&game.stats(), highlight);
    }
    println!("\n{}\n", share_text(title, &game.code(), &game.rows(), link));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Day, ManualClock};
    use crate::game::GameConfig;
    use crate::storage::{MemoryStore, Storage};
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn dictionary() -> Dictionary {
        Dictionary::new(
            words_from_slice(&["crane", "allow", "fuzzy"]),
            words_from_slice(&["slate", "adieu"]),
        )
        .unwrap()
    }

    #[test]
    fn parses_commands_and_guesses() {
        assert_eq!(parse_input("  \n"), None);
        assert_eq!(parse_input("QUIT\n"), Some(Input::Quit));
        assert_eq!(parse_input("reset"), Some(Input::Reset));
        assert_eq!(parse_input("Crane\n"), Some(Input::Guess("crane".into())));
    }

    #[test]
    fn plays_until_solved() {
        let dictionary = dictionary();
        let clock = ManualClock::new(Day::new(19_000));
        let storage = Storage::new("test", MemoryStore::default());
        let mut game = Game::new(&dictionary, storage, &clock).with_config(GameConfig::instant());
        game.load();

        let answer = game.answer().text().to_string();
        let input = format!("xyz\nzzzzz\nslate\n{answer}\nadieu\n");
        play_lines(&mut game, Cursor::new(input), "Rewordle", None).unwrap();

        assert!(game.is_solved());
        assert_eq!(game.guesses().len(), 2);
        assert_eq!(game.stats().games_won, 1);
    }

    #[test]
    fn stops_at_end_of_input() {
        let dictionary = dictionary();
        let clock = ManualClock::new(Day::new(19_000));
        let storage = Storage::new("test", MemoryStore::default());
        let mut game = Game::new(&dictionary, storage, &clock).with_config(GameConfig::instant());
        game.load();

        play_lines(&mut game, Cursor::new("slate\n"), "Rewordle", None).unwrap();
        assert_eq!(game.guesses().len(), 1);
    }
}
