//! Persisted per-day progress

use super::Game;
use crate::core::Guess;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the day's game is still in progress
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Won and Lost accept no further input
    #[inline]
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => write!(f, "playing"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// A player's progress on one day's game
///
/// Serialized as `{"currentGuess": ..., "guesses": [...], "status": ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub current_guess: String,
    #[serde(default)]
    pub guesses: Vec<Guess>,
    #[serde(default)]
    pub status: GameStatus,
}

impl GameState {
    /// Check that this state could have been produced by playing `game`
    ///
    /// # Errors
    /// Returns `Error::InvalidGameState` describing the first mismatch.
    pub fn validate_for(&self, game: &Game) -> Result<()> {
        let length = game.word_length();

        if self.current_guess.chars().count() > length {
            return Err(Error::InvalidGameState(format!(
                "current guess {:?} is longer than {length} letters",
                self.current_guess
            )));
        }

        if self.guesses.len() > game.max_attempts() {
            return Err(Error::InvalidGameState(format!(
                "{} guesses exceed the limit of {}",
                self.guesses.len(),
                game.max_attempts()
            )));
        }

        if self.status == GameStatus::Playing && self.guesses.len() >= game.max_attempts() {
            return Err(Error::InvalidGameState(format!(
                "still playing with all {} guesses used",
                game.max_attempts()
            )));
        }

        if let Some(guess) = self
            .guesses
            .iter()
            .find(|guess| guess.results().len() != length)
        {
            return Err(Error::InvalidGameState(format!(
                "guess {:?} does not have {length} letters",
                guess.word()
            )));
        }

        Ok(())
    }
}

/// Decode a stored [`GameState`]
///
/// # Errors
/// Returns `Error::InvalidGameState` unless `serialized` is a JSON object
/// with a string `currentGuess` and well-formed guesses.
///
/// # Examples
/// ```
/// use sqwordle::game::{GameStatus, parse_game_state};
///
/// let state = parse_game_state(r#"{"currentGuess":"ab"}"#).unwrap();
/// assert_eq!(state.current_guess, "ab");
/// assert_eq!(state.status, GameStatus::Playing);
///
/// assert!(parse_game_state("null").is_err());
/// ```
pub fn parse_game_state(serialized: &str) -> Result<GameState> {
    let invalid = |reason: String| Error::InvalidGameState(format!("{reason}: {serialized}"));

    let value: serde_json::Value =
        serde_json::from_str(serialized).map_err(|e| invalid(e.to_string()))?;
    if !value.is_object() {
        return Err(invalid("expected an object".to_string()));
    }

    serde_json::from_value(value).map_err(|e| invalid(e.to_string()))
}
