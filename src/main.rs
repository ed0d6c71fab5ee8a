//! Rewordle - CLI
//!
//! Daily word game with TUI and line-based modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rewordle::{
    commands::{run_simple, run_stats, share_game},
    config::Config,
    core::SystemClock,
    game::{Game, GameConfig},
    interactive::{App, run_tui},
    stats::{STATS_KEY, Stats},
    wordlists::{Dictionary, loader::load_from_file},
};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "rewordle",
    about = "Guess the daily five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base-36 day code; a past day starts a practice game that is not saved
    #[arg(short, long, global = true)]
    day: Option<String>,

    /// State file (default: <local data dir>/rewordle/storage.json)
    #[arg(short, long, global = true)]
    state: Option<PathBuf>,

    /// Extra accepted guesses, one word per line
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// Show lifetime statistics
    Stats,

    /// Print the share text for a finished game
    Share,
}

/// Install the log subscriber; `RUST_LOG` overrides `default`
fn init_tracing(default: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_dictionary(extra: Option<&Path>) -> Result<Dictionary> {
    let mut dictionary = Dictionary::embedded()?;
    if let Some(path) = extra {
        let words = load_from_file(path)
            .with_context(|| format!("reading word list {}", path.display()))?;
        dictionary.extend_guesses(words);
    }
    debug!(guesses = dictionary.guess_count(), "dictionary ready");
    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_tracing(if matches!(command, Commands::Play) {
        "off"
    } else {
        "warn"
    });

    let mut config = Config::default();
    if let Some(path) = cli.state {
        config.state_path = path;
    }
    if matches!(command, Commands::Simple) {
        config.game = GameConfig::instant();
    }

    let dictionary = load_dictionary(cli.words.as_deref())?;
    let storage = config
        .open_storage()
        .with_context(|| format!("opening {}", config.state_path.display()))?;

    if matches!(command, Commands::Stats) {
        run_stats(&storage.get(STATS_KEY, Stats::default()));
        return Ok(());
    }

    let mut game = Game::new(&dictionary, storage, SystemClock).with_config(config.game);
    game.load_code(cli.day.as_deref());
    let link = config.link.as_deref();

    match command {
        Commands::Play => run_tui(App::new(game, config.title.clone(), config.link.clone())),
        Commands::Simple => Ok(run_simple(&mut game, &config.title, link)?),
        Commands::Share => match share_game(&game, &config.title, link) {
            Some(text) => {
                println!("{text}");
                Ok(())
            }
            None => bail!("game #{} is not finished yet", game.code()),
        },
        Commands::Stats => Ok(()),
    }
}
