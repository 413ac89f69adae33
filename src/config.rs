//! Game configuration
//!
//! The start date anchors day 1 at local midnight for a fixed UTC offset.
//! Values usually come from the command line or `SQWORDLE_*` environment
//! variables.

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::game::{DEFAULT_MAX_ATTEMPTS, Game, get_day, get_game_for_day};
use chrono::{DateTime, FixedOffset, NaiveDate};
use tracing::debug;

/// Offset used when none is configured
pub const DEFAULT_UTC_OFFSET: &str = "-05:00";

/// Link appended to shared results when none is configured
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Settings shared by every day's game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub start_date: DateTime<FixedOffset>,
    pub max_attempts: usize,
    pub origin: String,
}

impl GameConfig {
    /// Configuration anchored at `start_date` with default settings
    #[must_use]
    pub fn starting_at(start_date: DateTime<FixedOffset>) -> Self {
        Self {
            start_date,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }

    /// Build a configuration from raw strings
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` if the offset or start date cannot be
    /// parsed, or `max_attempts` is zero.
    pub fn from_parts(
        start_date: &str,
        utc_offset: &str,
        max_attempts: usize,
        origin: impl Into<String>,
    ) -> Result<Self> {
        if max_attempts == 0 {
            return Err(Error::InvalidConfig(
                "max attempts must be at least 1".to_string(),
            ));
        }

        let offset = parse_utc_offset(utc_offset)?;
        let start_date = parse_start_date(start_date, offset)?;
        debug!(%start_date, max_attempts, "loaded game configuration");

        Ok(Self {
            start_date,
            max_attempts,
            origin: origin.into(),
        })
    }

    /// Resolve the game for the clock's current day
    ///
    /// # Errors
    /// Returns `Error::StartDateInFuture` if the clock is before the start
    /// date, or any error from [`get_game_for_day`].
    pub fn game_at<C, W>(&self, clock: &C, words: &[W]) -> Result<Game>
    where
        C: Clock + ?Sized,
        W: AsRef<str>,
    {
        let day = get_day(clock.now(), self.start_date)?;
        self.game_for_day(day, words)
    }

    /// Resolve the game for a specific day
    ///
    /// # Errors
    /// Returns any error from [`get_game_for_day`].
    pub fn game_for_day<W: AsRef<str>>(&self, day: u32, words: &[W]) -> Result<Game> {
        Ok(get_game_for_day(day, self.start_date, words)?.with_max_attempts(self.max_attempts))
    }
}

/// Parse `UTC`, `Z` or a `+HH:MM` / `-HH:MM` offset
///
/// # Errors
/// Returns `Error::InvalidConfig` for anything else.
pub fn parse_utc_offset(text: &str) -> Result<FixedOffset> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("utc") || text.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0)
            .ok_or_else(|| Error::InvalidConfig("invalid UTC offset".to_string()));
    }

    text.parse::<FixedOffset>()
        .map_err(|e| Error::InvalidConfig(format!("invalid UTC offset {text:?}: {e}")))
}

/// Parse the start date
///
/// Accepts an RFC 3339 instant, or a plain `YYYY-MM-DD` date taken as
/// midnight at `offset`.
///
/// # Errors
/// Returns `Error::InvalidConfig` if `text` is neither.
///
/// # Examples
/// ```
/// use chrono::FixedOffset;
/// use sqwordle::config::parse_start_date;
///
/// let offset = FixedOffset::west_opt(5 * 3600).unwrap();
/// let start = parse_start_date("2022-01-01", offset).unwrap();
/// assert_eq!(start.to_rfc3339(), "2022-01-01T00:00:00-05:00");
/// ```
pub fn parse_start_date(text: &str, offset: FixedOffset) -> Result<DateTime<FixedOffset>> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::InvalidConfig("missing start date".to_string()));
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Ok(instant);
    }

    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| Error::InvalidConfig(format!("invalid start date {text:?}: {e}")))?;

    date.and_hms_opt(0, 0, 0)
        .and_then(|midnight| midnight.and_local_timezone(offset).single())
        .ok_or_else(|| Error::InvalidConfig(format!("invalid start date {text:?}")))
}
