//! TUI application state and logic

use crate::core::{Clock, Feedback, WORD_LENGTH, Word};
use crate::game::{FLIP_DELAY, Game, GameEvent, KeyboardState};
use crate::output::outcome_message;
use crate::output::formatters::praise;
use crate::stats::Stats;
use crate::storage::KeyValueStore;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::error;

/// Redraw interval while tiles are flipping or a row is shaking
const ANIMATION_FRAME: Duration = Duration::from_millis(50);

/// Redraw interval otherwise, so the countdown keeps ticking
const IDLE_FRAME: Duration = Duration::from_secs(1);

/// Row currently being revealed
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    pub row: usize,
    pub started: Instant,
}

/// How the game ended
#[derive(Debug, Clone)]
pub struct Outcome {
    pub solved: bool,
    pub answer: Word,
    pub guesses: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<'a, S: KeyValueStore, C: Clock> {
    pub game: Game<'a, S, C>,
    pub title: String,
    pub link: Option<String>,
    /// Rows as shown on the board
    pub rows: Vec<(Word, Feedback)>,
    pub reveal: Option<Reveal>,
    pub shaking_row: Option<usize>,
    pub outcome: Option<Outcome>,
    /// Stats snapshot taken when the game ended
    pub stats: Stats,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl<'a, S: KeyValueStore, C: Clock> App<'a, S, C> {
    /// Wrap a loaded game
    pub fn new(game: Game<'a, S, C>, title: impl Into<String>, link: Option<String>) -> Self {
        let mut app = Self {
            game,
            title: title.into(),
            link,
            rows: Vec::new(),
            reveal: None,
            shaking_row: None,
            outcome: None,
            stats: Stats::default(),
            messages: Vec::new(),
            should_quit: false,
        };
        app.update();
        app
    }

    /// Run due timers and apply the resulting events
    pub fn update(&mut self) {
        self.game.tick();
        for event in self.game.drain_events() {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: GameEvent) {
        match event {
            GameEvent::Loaded { practice, .. } => {
                self.rows.clear();
                self.reveal = None;
                self.shaking_row = None;
                self.outcome = None;
                self.messages.clear();
                if practice {
                    self.add_message("Practice game: progress is not saved", MessageStyle::Info);
                } else {
                    self.add_message("Guess the word in six tries", MessageStyle::Info);
                }
            }
            GameEvent::GuessEvaluated {
                row,
                word,
                feedback,
                instant,
            } => {
                self.rows.truncate(row);
                self.rows.push((word, feedback));
                if !instant {
                    self.reveal = Some(Reveal {
                        row,
                        started: self.game.clock().now(),
                    });
                }
            }
            GameEvent::InvalidSubmission { row, guess } => {
                self.shaking_row = Some(row);
                let text = if guess.chars().count() < WORD_LENGTH {
                    "Not enough letters"
                } else {
                    "Not in word list"
                };
                self.add_message(text, MessageStyle::Error);
            }
            GameEvent::SaveFailed { error } => {
                self.add_message(&format!("Progress not saved: {error}"), MessageStyle::Error);
            }
            GameEvent::ShakeCleared { .. } => self.shaking_row = None,
            GameEvent::Ready { .. } => self.reveal = None,
            GameEvent::Finished {
                solved,
                answer,
                guesses,
            } => {
                self.reveal = None;
                self.stats = self.game.stats();
                if solved {
                    self.add_message(praise(guesses), MessageStyle::Success);
                }
                let style = if solved {
                    MessageStyle::Success
                } else {
                    MessageStyle::Error
                };
                self.add_message(&outcome_message(solved, guesses), style);
                self.outcome = Some(Outcome {
                    solved,
                    answer,
                    guesses,
                });
            }
            GameEvent::CurrentGuessUpdated { .. } => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => self.reset(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) if (key.modifiers - KeyModifiers::SHIFT).is_empty() => {
                self.game.push_letter(c);
            }
            KeyCode::Backspace => self.game.pop_letter(),
            KeyCode::Enter => {
                self.game.submit();
            }
            _ => {}
        }
        self.update();
    }

    fn reset(&mut self) {
        if self.game.is_practice() {
            self.add_message("Practice games cannot be reset", MessageStyle::Error);
        } else if let Err(err) = self.game.reset() {
            error!(%err, "could not reset game");
            self.add_message(&format!("Reset failed: {err}"), MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Tiles of `row` whose colors are showing
    #[must_use]
    pub fn revealed_tiles(&self, row: usize) -> usize {
        match self.reveal {
            Some(reveal) if reveal.row == row => {
                let elapsed = self.game.clock().now().saturating_duration_since(reveal.started);
                let flipped = elapsed.as_millis() / FLIP_DELAY.as_millis();
                usize::try_from(flipped)
                    .map_or(WORD_LENGTH, |n| n + 1)
                    .min(WORD_LENGTH)
            }
            _ => WORD_LENGTH,
        }
    }

    /// Keyboard colors for the rows that have finished revealing
    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        let shown = match self.reveal {
            Some(reveal) => &self.rows[..reveal.row.min(self.rows.len())],
            None => &self.rows[..],
        };
        KeyboardState::from_rows(shown)
    }

    /// How long to wait for input before the next redraw
    #[must_use]
    pub fn poll_timeout(&self) -> Duration {
        if self.reveal.is_some() || self.shaking_row.is_some() {
            return ANIMATION_FRAME;
        }
        self.game
            .next_deadline()
            .map_or(IDLE_FRAME, |deadline| {
                deadline.saturating_duration_since(self.game.clock().now())
            })
            .min(IDLE_FRAME)
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore, C: Clock>(app: App<'_, S, C>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: KeyValueStore, C: Clock>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S, C>,
) -> Result<()> {
    loop {
        app.update();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if app.should_quit {
            break;
        }

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(app.poll_timeout())?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }
    }

    Ok(())
}
