//! Shareable game summary

use super::Game;
use crate::core::Guess;

/// Title used in the share header
pub const GAME_TITLE: &str = "SQWORDLE";

/// Render guesses as a header line, a blank line and one glyph row per guess
///
/// # Examples
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use sqwordle::core::Guess;
/// use sqwordle::game::{format_share_text, get_game_for_day};
///
/// let start = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
/// let game = get_game_for_day(1, start, &["word", "ward"]).unwrap();
/// let guesses = [Guess::score("ward", "word").unwrap(), Guess::score("word", "word").unwrap()];
///
/// assert_eq!(format_share_text(&game, &guesses), "SQWORDLE #1 2/6\n\n🟩⬜🟩🟩\n🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn format_share_text(game: &Game, guesses: &[Guess]) -> String {
    let header = format!(
        "{GAME_TITLE} #{} {}/{}",
        game.day(),
        guesses.len(),
        game.max_attempts()
    );

    let rows = guesses
        .iter()
        .map(|guess| guess.results().iter().map(|r| r.emoji()).collect::<String>());

    [header, String::new()]
        .into_iter()
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Share text followed by a link back to the game
#[must_use]
pub fn share_message(text: &str, origin: &str) -> String {
    format!("{text} {origin}")
}
