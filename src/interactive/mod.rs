//! Interactive TUI interface
//!
//! Full-screen daily game built on ratatui and crossterm.

pub mod app;
pub mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
