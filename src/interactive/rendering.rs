//! TUI rendering with ratatui
//!
//! Board, keyboard and end-of-game dialog for the daily game.

use super::app::{App, MessageStyle};
use crate::clock::Clock;
use crate::core::LetterResult;
use crate::game::{GAME_TITLE, GameStatus};
use crate::output::formatters::KEYBOARD_ROWS;
use crate::storage::Storage;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: Storage, C: Clock>(f: &mut Frame, app: &App<S, C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and messages
            Constraint::Length(5), // Keyboard
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if let Some(status) = app.dialog {
        render_dialog(f, app, status);
    }
}

const fn tile_style(result: LetterResult) -> Style {
    match result {
        LetterResult::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        LetterResult::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        LetterResult::Incorrect => Style::new().fg(Color::White).bg(Color::DarkGray),
        LetterResult::Empty => Style::new().fg(Color::White),
    }
}

fn tile(letter: char, result: LetterResult) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        tile_style(result).add_modifier(Modifier::BOLD),
    )
}

fn render_header<S: Storage, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let header = Paragraph::new(format!("{GAME_TITLE} #{}", app.session.game().day()))
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

fn render_board<S: Storage, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let session = &app.session;
    let length = session.word_length();

    let mut lines: Vec<Line> = session
        .guesses()
        .iter()
        .map(|guess| {
            Line::from(
                guess
                    .letters()
                    .flat_map(|(letter, result)| [tile(letter, result), Span::raw(" ")])
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    if session.status() == GameStatus::Playing {
        let typed = session.current_guess().chars().count();
        let mut spans: Vec<Span> = session
            .current_guess()
            .chars()
            .flat_map(|letter| [tile(letter, LetterResult::Empty), Span::raw(" ")])
            .collect();
        for _ in typed..length {
            spans.push(Span::styled(" _ ", Style::default().fg(Color::Gray)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    for _ in 0..session.attempts_remaining() {
        lines.push(Line::styled(
            " _  ".repeat(length),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Who's that Pokémon? ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard<S: Storage, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let hints = app.session.keyboard_hints();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.chars()
                    .flat_map(|letter| [tile(letter, hints.get(letter)), Span::raw(" ")])
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Keyboard "));
    f.render_widget(keyboard, area);
}

fn render_messages<S: Storage, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
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

fn render_dialog<S: Storage, C: Clock>(f: &mut Frame, app: &App<S, C>, status: GameStatus) {
    let solution = app.session.game().solution().to_uppercase();
    let (title, headline, color) = match status {
        GameStatus::Won => (
            " 🎉 Caught! 🎉 ",
            format!("Gotcha! {solution} was caught!"),
            Color::Green,
        ),
        GameStatus::Lost | GameStatus::Playing => (
            " Game over ",
            format!("Oh no! {solution} got away!"),
            Color::Red,
        ),
    };

    let mut lines = vec![
        Line::styled(headline, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(vec![
            Span::raw("The next pokémon will appear in "),
            Span::styled(app.countdown(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
    ];
    lines.extend(app.share_text().lines().map(|line| Line::from(line.to_string())));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Esc: close | q: quit",
        Style::default().fg(Color::DarkGray),
    ));

    let area = centered_rect(60, 60, f.area());
    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}

fn render_status<S: Storage, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let game = app.session.game();
    let attempts = format!(
        "Guesses: {}/{}",
        app.session.guesses().len(),
        game.max_attempts()
    );
    f.render_widget(Paragraph::new(attempts).alignment(Alignment::Center), chunks[0]);

    let countdown = format!("Next: {}", app.countdown());
    f.render_widget(Paragraph::new(countdown).alignment(Alignment::Center), chunks[1]);

    let help_text = if app.session.status().is_finished() {
        "Esc: Quit"
    } else {
        "Enter: Submit | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

/// A rectangle of `percent_x` by `percent_y` centered in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
