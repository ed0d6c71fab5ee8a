//! TUI rendering with ratatui
//!
//! Board, keyboard, messages and the end-of-game results panel.

use super::app::{App, MessageStyle};
use crate::core::{Clock, GUESS_LIMIT, LetterState, WORD_LENGTH};
use crate::output::formatters::{countdown, distribution_bar, share_text};
use crate::stats::StatKind;
use crate::storage::KeyValueStore;
use chrono::Local;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<'_, S, C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Board, six rows plus borders
            Constraint::Length(5), // Keyboard
            Constraint::Min(3),    // Messages
        ])
        .split(main_chunks[0]);

    render_board(f, app, left[0]);
    render_keyboard(f, app, left[1]);
    render_messages(f, app, left[2]);
    render_results(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<'_, S, C>, area: Rect) {
    let day = app.game.day();
    let mut title = format!("{} #{} ({})", app.title, day.code(), day.date());
    if app.game.is_practice() {
        title.push_str(" (practice)");
    }
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn state_style(state: LetterState) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match state {
        LetterState::Correct => base.fg(Color::Black).bg(Color::Green),
        LetterState::Valid => base.fg(Color::Black).bg(Color::Yellow),
        LetterState::Invalid => base.fg(Color::White).bg(Color::DarkGray),
        LetterState::Wrong => base.fg(Color::White).bg(Color::Red),
        LetterState::Empty => base.fg(Color::White),
    }
}

fn tile(letter: char, state: LetterState) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), state_style(state))
}

fn render_board<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<'_, S, C>, area: Rect) {
    let current_row = app.rows.len();
    let current = app.game.current_guess();

    let lines: Vec<Line> = (0..GUESS_LIMIT)
        .map(|row| {
            let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
            if let Some((word, feedback)) = app.rows.get(row) {
                let shown = app.revealed_tiles(row);
                for (i, letter) in word.text().chars().enumerate() {
                    let state = if i < shown {
                        feedback.at(i)
                    } else {
                        LetterState::Empty
                    };
                    spans.push(tile(letter, state));
                    spans.push(Span::raw(" "));
                }
            } else if row == current_row && app.outcome.is_none() {
                let shaking = app.shaking_row == Some(row);
                let letters: Vec<char> = current.chars().collect();
                for i in 0..WORD_LENGTH {
                    let span = match letters.get(i) {
                        Some(&letter) => tile(letter, LetterState::Empty),
                        None => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                    };
                    let span = if shaking {
                        span.style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                    } else {
                        span
                    };
                    spans.push(span);
                    spans.push(Span::raw(" "));
                }
            } else {
                for _ in 0..WORD_LENGTH {
                    spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                    spans.push(Span::raw(" "));
                }
            }
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<'_, S, C>, area: Rect) {
    let keyboard = app.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|letter| {
                    [
                        tile(char::from(letter), keyboard.get(letter)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_messages<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<'_, S, C>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_results<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<'_, S, C>, area: Rect) {
    let block = Block::default()
        .title(" Results ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(outcome) = &app.outcome else {
        let waiting = Paragraph::new(vec![
            Line::from(""),
            Line::from("Type a word and press Enter."),
            Line::from(""),
            Line::from(vec![
                tile('g', LetterState::Correct),
                Span::raw(" right spot"),
            ]),
            Line::from(vec![
                tile('y', LetterState::Valid),
                Span::raw(" wrong spot"),
            ]),
            Line::from(vec![
                tile('x', LetterState::Invalid),
                Span::raw(" not in word"),
            ]),
        ])
        .block(block);
        f.render_widget(waiting, area);
        return;
    };

    let answer_state = if outcome.solved {
        LetterState::Correct
    } else {
        LetterState::Wrong
    };
    let mut lines = vec![
        Line::from(
            outcome
                .answer
                .text()
                .chars()
                .flat_map(|letter| [tile(letter, answer_state), Span::raw(" ")])
                .collect::<Vec<_>>(),
        ),
        Line::from(""),
    ];

    if app.game.is_practice() {
        lines.push(Line::from("Practice game, stats unchanged"));
    } else {
        let stats = &app.stats;
        for kind in StatKind::ALL {
            lines.push(Line::from(vec![
                Span::raw(format!("{:<16}", kind.label())),
                Span::styled(
                    stats.value(kind).to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Guess distribution",
            Style::default().fg(Color::Cyan),
        )));
        let max = stats.max_bucket();
        let highlight = outcome.solved.then(|| outcome.guesses - 1);
        for (i, &count) in stats.guess_distribution.iter().enumerate() {
            let color = if highlight == Some(i) {
                Color::Green
            } else {
                Color::DarkGray
            };
            lines.push(Line::from(vec![
                Span::raw(format!("{}: ", i + 1)),
                Span::styled(distribution_bar(count, max, 16), Style::default().fg(color)),
                Span::raw(format!(" {count}")),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "Next word in {}",
        countdown(Local::now().time())
    )));
    lines.push(Line::from(""));
    let share = share_text(
        &app.title,
        &app.game.code(),
        &app.game.rows(),
        app.link.as_deref(),
    );
    lines.extend(share.lines().map(|line| Line::from(line.to_string())));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_status<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<'_, S, C>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let turn = format!(
        "Guess {}/{GUESS_LIMIT}",
        (app.rows.len() + 1).min(GUESS_LIMIT)
    );
    f.render_widget(Paragraph::new(turn).alignment(Alignment::Center), chunks[0]);

    let help_text = if app.outcome.is_some() {
        "Esc: Quit | Ctrl-R: Reset"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
