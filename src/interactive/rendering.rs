//! TUI rendering with ratatui
//!
//! Board, keyboard and status panels for a live round.

use super::app::{App, MessageStyle};
use crate::core::{KeyboardState, Verdict};
use crate::game::{Clock, Outcome};
use crate::output::display::KEYBOARD_ROWS;
use crate::output::formatters::duration_phrase;
use crate::presence::ProgressSink;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<C: Clock, R: Rng, S: ProgressSink>(f: &mut Frame, app: &App<'_, C, R, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Keyboard, messages, share
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);
}

fn render_header<C: Clock, R: Rng, S: ProgressSink>(
    f: &mut Frame,
    app: &App<'_, C, R, S>,
    area: Rect,
) {
    let title = format!(
        "🎯 {} · Round {}",
        app.config.game_name,
        app.session.round_number()
    );
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

fn verdict_style(verdict: Verdict) -> Style {
    let bg = match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn tile_span(letter: Option<char>, style: Style) -> Span<'static> {
    let text = letter.map_or_else(|| " _ ".to_string(), |c| format!(" {} ", c.to_uppercase()));
    Span::styled(text, style)
}

fn board_lines<C: Clock, R: Rng, S: ProgressSink>(app: &App<'_, C, R, S>) -> Vec<Line<'static>> {
    let session = &app.session;
    let guesses = session.guesses();
    let typing_row = (session.outcome() == Outcome::InProgress && !session.is_row_pending())
        .then(|| session.current_row());
    let typed: Vec<char> = session.current_guess().chars().collect();
    let typing_style = if app.shake {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };

    let mut lines = Vec::with_capacity(session.max_attempts() * 2);
    for row in 0..session.max_attempts() {
        let mut spans = Vec::with_capacity(session.word_length() * 2);
        if let Some(guess) = guesses.get(row) {
            for (letter, verdict) in guess.tiles() {
                spans.push(tile_span(Some(letter), verdict_style(verdict)));
                spans.push(Span::raw(" "));
            }
        } else if typing_row == Some(row) {
            for col in 0..session.word_length() {
                spans.push(tile_span(typed.get(col).copied(), typing_style));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..session.word_length() {
                spans.push(tile_span(None, Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines
}

fn render_board<C: Clock, R: Rng, S: ProgressSink>(
    f: &mut Frame,
    app: &App<'_, C, R, S>,
    area: Rect,
) {
    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn keyboard_lines(keyboard: &KeyboardState) -> Vec<Line<'static>> {
    let key = |letter: char| {
        let style = keyboard.get(letter).map_or_else(
            || Style::default().fg(Color::White),
            verdict_style,
        );
        Span::styled(format!(" {} ", letter.to_uppercase()), style)
    };

    let mut lines: Vec<Line<'static>> = KEYBOARD_ROWS
        .iter()
        .map(|row| Line::from(row.chars().map(key).collect::<Vec<_>>()))
        .collect();

    let mut extra: Vec<char> = keyboard
        .letters()
        .filter(|c| !KEYBOARD_ROWS.iter().any(|row| row.contains(*c)))
        .collect();
    if !extra.is_empty() {
        extra.sort_unstable();
        lines.push(Line::from(extra.into_iter().map(key).collect::<Vec<_>>()));
    }
    lines
}

fn render_side_panel<C: Clock, R: Rng, S: ProgressSink>(
    f: &mut Frame,
    app: &App<'_, C, R, S>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),      // Keyboard
            Constraint::Percentage(40), // Messages
            Constraint::Min(6),         // Share text
        ])
        .split(area);

    let keyboard = Paragraph::new(keyboard_lines(&app.session.keyboard()))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, chunks[0]);

    render_messages(f, app, chunks[1]);

    let share = app
        .share_text
        .as_deref()
        .unwrap_or("Finish the round to get your share text.");
    let share = Paragraph::new(share)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Share ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(share, chunks[2]);
}

fn render_messages<C: Clock, R: Rng, S: ProgressSink>(
    f: &mut Frame,
    app: &App<'_, C, R, S>,
    area: Rect,
) {
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

fn render_status<C: Clock, R: Rng, S: ProgressSink>(
    f: &mut Frame,
    app: &App<'_, C, R, S>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let attempts = format!(
        "Attempts: {}/{}",
        app.session.attempts_used(),
        app.session.max_attempts()
    );
    f.render_widget(Paragraph::new(attempts).alignment(Alignment::Center), chunks[0]);

    let elapsed = duration_phrase(app.session.elapsed()).unwrap_or_else(|| "0 seconds".to_string());
    f.render_widget(
        Paragraph::new(format!("⏱ {elapsed}")).alignment(Alignment::Center),
        chunks[1],
    );

    f.render_widget(
        Paragraph::new(format!("Next round: {}", app.countdown())).alignment(Alignment::Center),
        chunks[2],
    );

    let help = Paragraph::new("Enter: Submit | Tab: Hint | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
