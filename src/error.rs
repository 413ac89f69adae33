//! Error types for the game engine.

use chrono::{DateTime, FixedOffset, Utc};
use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for game operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A guess was scored against a solution of a different length.
    #[error("{guess:?} is not a valid guess (expected {expected} letters, got {actual})")]
    InvalidGuess {
        guess: String,
        expected: usize,
        actual: usize,
    },

    /// The configured start date lies after the current instant.
    #[error("unable to determine the current day number, start date {start} is after {now}")]
    StartDateInFuture {
        start: DateTime<FixedOffset>,
        now: DateTime<Utc>,
    },

    /// No words were available to pick a solution from.
    #[error("word list is empty")]
    EmptyWordList,

    /// Days are numbered from 1.
    #[error("invalid day number: {0}")]
    InvalidDay(u32),

    /// The day's end boundary cannot be represented as a date.
    #[error("day {0} is out of the supported date range")]
    DayOutOfRange(u32),

    /// Days elapsed since the start date do not fit a day number.
    #[error("{0} days since the start date exceed the largest day number")]
    DayCountOverflow(i64),

    /// Configuration value could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Persisted game state is malformed.
    #[error("invalid game state: {0}")]
    InvalidGameState(String),

    /// Persistence collaborator failure.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// I/O error while loading word lists or log files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures reported by a [`Storage`](crate::storage::Storage) backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying file could not be read or written.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored contents could not be encoded or decoded.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
