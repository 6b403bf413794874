//! TUI rendering with ratatui
//!
//! Draws the gallows, the word with blanks, the on-screen keyboard, and the
//! message log.

use super::app::{App, MessageStyle};
use crate::core::{Letter, MAX_INCORRECT, Phase};
use crate::output::formatters::gallows;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Main content
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Gallows drawing
            Constraint::Percentage(60), // Word + messages
        ])
        .split(chunks[1]);

    render_drawing(f, app, main_chunks[0]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Word
            Constraint::Min(4),    // Messages
        ])
        .split(main_chunks[1]);

    render_word(f, app, right_chunks[0]);
    render_messages(f, app, right_chunks[1]);

    // Keyboard
    render_keyboard(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
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

fn render_drawing(f: &mut Frame, app: &App, area: Rect) {
    let misses = app.game.incorrect_letters().len();

    let drawing = Paragraph::new(gallows(misses))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Gallows {misses}/{MAX_INCORRECT} "))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(drawing, area);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let guessed = app.game.guessed();
    let phase = app.game.phase();

    let mut spans: Vec<Span> = Vec::new();
    for letter in app.game.word().letters() {
        let span = if guessed.contains(&letter) {
            let color = if phase == Phase::Won {
                Color::Green
            } else {
                Color::White
            };
            Span::styled(
                format!("{} ", letter.as_char()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        } else if phase == Phase::Lost {
            // Reveal the missed letters on a loss
            Span::styled(
                format!("{} ", letter.as_char()),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("_ ", Style::default().fg(Color::DarkGray))
        };
        spans.push(span);
    }

    let word = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(word, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let over = game.phase() != Phase::Playing;
    let correct = game.correct_letters();
    let incorrect = game.incorrect_letters();

    let style_for = |letter: Letter| {
        if correct.contains(&letter) {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else if incorrect.contains(&letter) {
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if over {
            // Round over: unused keys go dark
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        }
    };

    let alphabet: Vec<Letter> = Letter::alphabet().collect();
    let rows: Vec<Line> = alphabet
        .chunks(13)
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|&letter| {
                    Span::styled(format!(" {} ", letter.as_char()), style_for(letter))
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(rows).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let phase_text = match app.game.phase() {
        Phase::Playing => "Playing",
        Phase::Won => "Won!",
        Phase::Lost => "Lost",
    };
    let phase = Paragraph::new(format!("Round: {phase_text}")).alignment(Alignment::Center);
    f.render_widget(phase, chunks[0]);

    let misses_text = format!(
        "Misses: {}/{MAX_INCORRECT}",
        app.game.incorrect_letters().len()
    );
    let misses = Paragraph::new(misses_text).alignment(Alignment::Center);
    f.render_widget(misses, chunks[1]);

    let help = Paragraph::new("a-z: Guess | Enter: New Round | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
