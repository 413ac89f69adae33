//! Sharing a finished game

use crate::game::{Session, share_message};
use crate::storage::Storage;

/// Share message for a finished game, or `None` while it is still in progress
#[must_use]
pub fn share_summary<S: Storage>(session: &Session<S>, origin: &str) -> Option<String> {
    session
        .status()
        .is_finished()
        .then(|| share_message(&session.share_text(), origin))
}

/// Shown instead of a summary while the game is still in progress
pub const SHARE_IN_PROGRESS: &str = "Finish today's game to share your result!";

/// Share message, or a reminder to finish the game first
#[must_use]
pub fn share_reply<S: Storage>(session: &Session<S>, origin: &str) -> String {
    share_summary(session, origin).unwrap_or_else(|| SHARE_IN_PROGRESS.to_string())
}
