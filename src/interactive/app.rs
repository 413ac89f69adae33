//! TUI application state and logic

use crate::clock::Clock;
use crate::config::GameConfig;
use crate::game::{GameStatus, Session, Submission, format_countdown, get_day, share_message};
use crate::storage::Storage;
use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::warn;

/// How long to wait for input before checking the clock again
const TICK_RATE: Duration = Duration::from_millis(200);

/// Maximum number of messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<S: Storage, C: Clock> {
    pub session: Session<S>,
    pub config: GameConfig,
    pub words: Vec<String>,
    pub messages: Vec<Message>,
    /// Open end-of-game dialog, if any
    pub dialog: Option<GameStatus>,
    pub should_quit: bool,
    clock: C,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: Storage, C: Clock> App<S, C> {
    /// Wrap a loaded session
    ///
    /// A game that is already over opens with its end-of-game dialog.
    #[must_use]
    pub fn new(session: Session<S>, config: GameConfig, words: Vec<String>, clock: C) -> Self {
        let status = session.status();
        let mut app = Self {
            session,
            config,
            words,
            messages: Vec::new(),
            dialog: status.is_finished().then_some(status),
            should_quit: false,
            clock,
        };

        if status == GameStatus::Playing {
            app.add_message("A wild pokémon appeared! Type a guess.", MessageStyle::Info);
        }
        app
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.dialog.is_some() {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.dialog = None,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => {
                self.session.append_letter(c);
            }
            KeyCode::Backspace => {
                self.session.backspace();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    /// Check the clock and move to the next day's game once today's ends
    pub fn tick(&mut self) {
        let now = self.clock.now();
        self.roll_over_if_ended(now);
    }

    /// Time until the next game as `HH:MM:SS`
    #[must_use]
    pub fn countdown(&self) -> String {
        format_countdown(self.clock.now(), self.session.game().ends_at())
    }

    /// Share text with the configured link appended
    #[must_use]
    pub fn share_text(&self) -> String {
        share_message(&self.session.share_text(), &self.config.origin)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    fn submit(&mut self) {
        match self.session.submit() {
            Submission::Accepted(GameStatus::Playing) => {}
            Submission::Accepted(status) => {
                let solution = self.session.game().solution().to_uppercase();
                if status == GameStatus::Won {
                    self.add_message(
                        &format!("Gotcha! {solution} was caught!"),
                        MessageStyle::Success,
                    );
                } else {
                    self.add_message(
                        &format!("Oh no! {solution} got away!"),
                        MessageStyle::Error,
                    );
                }
                self.dialog = Some(status);
            }
            Submission::NotAWord(word) => {
                self.add_message(
                    &format!("Sorry, {} is not a pokémon", word.to_uppercase()),
                    MessageStyle::Error,
                );
            }
            Submission::Unavailable => {
                if self.session.status() == GameStatus::Playing {
                    self.add_message("Not enough letters", MessageStyle::Error);
                }
            }
        }
    }

    fn roll_over_if_ended(&mut self, now: DateTime<Utc>) {
        if !self.session.game().has_ended(now) {
            return;
        }

        let next = get_day(now, self.config.start_date)
            .and_then(|day| self.config.game_for_day(day, &self.words));
        match next {
            Ok(game) => {
                self.session.roll_over(game);
                self.dialog = None;
                self.messages.clear();
                self.add_message("A new pokémon appeared!", MessageStyle::Info);
            }
            Err(e) => warn!(error = %e, "could not load the next day's game"),
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: Storage, C: Clock>(app: App<S, C>) -> Result<()> {
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

fn run_app<B, S, C>(terminal: &mut Terminal<B>, mut app: App<S, C>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: Storage,
    C: Clock,
{
    loop {
        app.tick();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
