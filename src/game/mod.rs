//! Daily game resolution and play
//!
//! A [`Game`] is resolved once per day from the word list and the start
//! date; a [`Session`] drives the player's guesses against it and keeps the
//! [`GameState`] in a [`Storage`](crate::storage::Storage) backend.

mod countdown;
mod day;
mod session;
mod share;
mod state;

pub use countdown::format_countdown;
pub use day::{DEFAULT_MAX_ATTEMPTS, Game, get_day, get_game_for_day};
pub use session::{Actions, Session, Submission};
pub use share::{GAME_TITLE, format_share_text, share_message};
pub use state::{GameState, GameStatus, parse_game_state};
