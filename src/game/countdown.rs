//! Time left until the next game

use chrono::{DateTime, TimeZone, Utc};

/// Whole seconds from `from` until `to` as `HH:MM:SS`
///
/// Clamped at `00:00:00` once `to` has passed. Hours are not wrapped.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use sqwordle::game::format_countdown;
///
/// let now = Utc.with_ymd_and_hms(2022, 1, 1, 22, 58, 30).unwrap();
/// let end = Utc.with_ymd_and_hms(2022, 1, 2, 0, 0, 0).unwrap();
/// assert_eq!(format_countdown(now, end), "01:01:30");
/// ```
#[must_use]
pub fn format_countdown<Tz: TimeZone>(from: DateTime<Utc>, to: DateTime<Tz>) -> String {
    let total_seconds = to.signed_duration_since(from).num_seconds().max(0);

    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
