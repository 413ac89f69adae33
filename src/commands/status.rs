//! Today's game at a glance

use crate::game::{GameStatus, Session, format_countdown};
use crate::storage::Storage;
use chrono::{DateTime, Utc};

/// Summary of a session at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub day: u32,
    pub status: GameStatus,
    pub word_length: usize,
    pub attempts_used: usize,
    pub max_attempts: usize,
    pub countdown: String,
}

/// Describe `session` as seen at `now`
#[must_use]
pub fn status_report<S: Storage>(session: &Session<S>, now: DateTime<Utc>) -> StatusReport {
    let game = session.game();
    StatusReport {
        day: game.day(),
        status: session.status(),
        word_length: game.word_length(),
        attempts_used: session.guesses().len(),
        max_attempts: game.max_attempts(),
        countdown: format_countdown(now, game.ends_at()),
    }
}
