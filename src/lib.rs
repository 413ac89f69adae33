//! Sqwordle
//!
//! A daily Pokémon-themed word-guessing game: one solution per calendar
//! day, a fixed number of attempts, per-letter feedback, keyboard hints and
//! a shareable emoji summary.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::{FixedOffset, TimeZone};
//! use sqwordle::game::{GameStatus, Session, Submission, get_game_for_day};
//! use sqwordle::storage::MemoryStorage;
//!
//! let start = FixedOffset::west_opt(5 * 3600)
//!     .unwrap()
//!     .with_ymd_and_hms(2022, 1, 1, 0, 0, 0)
//!     .unwrap();
//! let game = get_game_for_day(1, start, &["mew", "abra"]).unwrap();
//! let mut session = Session::load(game, MemoryStorage::new());
//!
//! for letter in "mew".chars() {
//!     session.append_letter(letter);
//! }
//! assert_eq!(session.submit(), Submission::Accepted(GameStatus::Won));
//! assert_eq!(session.share_text(), "SQWORDLE #1 1/6\n\n🟩🟩🟩");
//! ```

// Core domain types
pub mod core;

// Daily game resolution and sessions
pub mod game;

// Injectable time source
pub mod clock;

// Configuration
pub mod config;

// Error types
pub mod error;

// Persistence
pub mod storage;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;

pub use error::{Error, Result};
