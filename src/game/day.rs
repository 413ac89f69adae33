//! Mapping calendar time to the day's game
//!
//! Days are counted in whole 24 hour periods from the configured start
//! instant, starting at day 1. Each day plays the next word of the list,
//! wrapping around once the list is exhausted.

use crate::error::{Error, Result};
use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use rustc_hash::FxHashSet;

/// Guesses allowed per game unless configured otherwise
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// A single day's puzzle
///
/// Immutable once resolved; the solution is always one of the valid words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    day: u32,
    ends_at: DateTime<FixedOffset>,
    max_attempts: usize,
    solution: String,
    valid_words: FxHashSet<String>,
}

impl Game {
    /// Day number, starting at 1
    #[inline]
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Exclusive end of this day's puzzle
    #[inline]
    #[must_use]
    pub const fn ends_at(&self) -> DateTime<FixedOffset> {
        self.ends_at
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub fn solution(&self) -> &str {
        &self.solution
    }

    /// Words that may be submitted as guesses
    #[inline]
    #[must_use]
    pub const fn valid_words(&self) -> &FxHashSet<String> {
        &self.valid_words
    }

    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.solution.chars().count()
    }

    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.valid_words.contains(word)
    }

    /// Check if `now` is at or past the end of this game
    #[must_use]
    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        now >= self.ends_at
    }

    /// Replace the number of allowed guesses (at least one)
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }
}

/// Day number for `now`, counting from 1 on the day of `start_date`
///
/// # Errors
/// Returns `Error::StartDateInFuture` if `start_date` is after `now`, or
/// `Error::DayCountOverflow` if the day number does not fit in a `u32`.
///
/// # Examples
/// ```
/// use chrono::{FixedOffset, TimeZone, Utc};
/// use sqwordle::game::get_day;
///
/// let start = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
/// let now = Utc.with_ymd_and_hms(2022, 1, 3, 9, 30, 0).unwrap();
/// assert_eq!(get_day(now, start).unwrap(), 3);
/// ```
pub fn get_day(now: DateTime<Utc>, start_date: DateTime<FixedOffset>) -> Result<u32> {
    let elapsed = now.signed_duration_since(start_date);
    let days_since_start = elapsed.num_seconds().div_euclid(SECONDS_PER_DAY);

    if days_since_start < 0 {
        return Err(Error::StartDateInFuture {
            start: start_date,
            now,
        });
    }

    day_number(days_since_start)
}

fn day_number(days_since_start: i64) -> Result<u32> {
    days_since_start
        .checked_add(1)
        .and_then(|day| u32::try_from(day).ok())
        .ok_or(Error::DayCountOverflow(days_since_start))
}

/// Resolve the game for `day`
///
/// Pure: the same inputs always produce the same game. The solution is
/// `words[(day - 1) % words.len()]` and the valid words are every word of
/// the same length as the solution.
///
/// # Errors
/// Returns an error if `day` is 0, `words` is empty, or the end of the day
/// cannot be represented.
pub fn get_game_for_day<W: AsRef<str>>(
    day: u32,
    start_date: DateTime<FixedOffset>,
    words: &[W],
) -> Result<Game> {
    if day == 0 {
        return Err(Error::InvalidDay(day));
    }
    if words.is_empty() {
        return Err(Error::EmptyWordList);
    }

    let index = (day - 1) as usize % words.len();
    let solution = words[index].as_ref().to_string();
    let length = solution.chars().count();

    let valid_words = words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| word.chars().count() == length)
        .map(str::to_string)
        .collect();

    let ends_at = TimeDelta::try_days(i64::from(day))
        .and_then(|offset| start_date.checked_add_signed(offset))
        .ok_or(Error::DayOutOfRange(day))?;

    Ok(Game {
        day,
        ends_at,
        max_attempts: DEFAULT_MAX_ATTEMPTS,
        solution,
        valid_words,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const WORDS: [&str; 3] = ["first", "second", "third"];

    fn start() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2022, 1, 1, 0, 0, 0)
            .unwrap()
    }

    fn words(list: &[&str]) -> FxHashSet<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn day_number_counts_from_one() {
        assert_eq!(day_number(0).unwrap(), 1);
        assert_eq!(day_number(i64::from(u32::MAX) - 1).unwrap(), u32::MAX);
    }

    #[test]
    fn day_number_overflow_reports_elapsed_days() {
        let elapsed = i64::from(u32::MAX);
        match day_number(elapsed) {
            Err(Error::DayCountOverflow(days)) => assert_eq!(days, elapsed),
            other => panic!("expected DayCountOverflow, got {other:?}"),
        }
        assert!(matches!(
            day_number(i64::MAX),
            Err(Error::DayCountOverflow(i64::MAX))
        ));
    }

    #[test]
    fn first_day_game() {
        let game = get_game_for_day(1, start(), &WORDS).unwrap();
        assert_eq!(game.day(), 1);
        assert_eq!(game.solution(), "first");
        assert_eq!(game.max_attempts(), 6);
        assert_eq!(game.valid_words(), &words(&["first", "third"]));
        assert_eq!(game.ends_at(), start() + TimeDelta::days(1));
    }

    #[test]
    fn second_day_game() {
        let game = get_game_for_day(2, start(), &WORDS).unwrap();
        assert_eq!(game.solution(), "second");
        assert_eq!(game.valid_words(), &words(&["second"]));
        assert_eq!(game.ends_at(), start() + TimeDelta::days(2));
    }

    #[test]
    fn wraps_around_word_list() {
        let game = get_game_for_day(4, start(), &WORDS).unwrap();
        assert_eq!(game.solution(), "first");
        assert_eq!(game.valid_words(), &words(&["first", "third"]));
        let expected_end = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2022, 1, 5, 0, 0, 0)
            .unwrap();
        assert_eq!(game.ends_at(), expected_end);
    }

    #[test]
    fn large_day_is_stable() {
        let game = get_game_for_day(3_000_001, start(), &WORDS).unwrap();
        assert_eq!(game.solution(), "first");
    }

    #[test]
    fn solution_is_always_valid() {
        for day in 1..=10 {
            let game = get_game_for_day(day, start(), &WORDS).unwrap();
            assert!(game.is_valid_word(game.solution()));
            assert_eq!(game.word_length(), game.solution().len());
        }
    }

    #[test]
    fn deterministic() {
        let a = get_game_for_day(7, start(), &WORDS).unwrap();
        let b = get_game_for_day(7, start(), &WORDS).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_day_zero_and_empty_list() {
        assert!(matches!(
            get_game_for_day(0, start(), &WORDS),
            Err(Error::InvalidDay(0))
        ));
        let empty: [&str; 0] = [];
        assert!(matches!(
            get_game_for_day(1, start(), &empty),
            Err(Error::EmptyWordList)
        ));
    }

    #[test]
    fn with_max_attempts_overrides() {
        let game = get_game_for_day(1, start(), &WORDS)
            .unwrap()
            .with_max_attempts(10);
        assert_eq!(game.max_attempts(), 10);
        assert_eq!(game.clone().with_max_attempts(0).max_attempts(), 1);
    }

    #[test]
    fn get_day_counts_from_one() {
        let now = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(get_day(now, start()).unwrap(), 1);

        let now = Utc.with_ymd_and_hms(2022, 1, 1, 23, 59, 59).unwrap();
        assert_eq!(get_day(now, start()).unwrap(), 1);

        let now = Utc.with_ymd_and_hms(2022, 1, 2, 0, 0, 0).unwrap();
        assert_eq!(get_day(now, start()).unwrap(), 2);

        let now = Utc.with_ymd_and_hms(2022, 2, 1, 12, 0, 0).unwrap();
        assert_eq!(get_day(now, start()).unwrap(), 32);
    }

    #[test]
    fn get_day_respects_offset() {
        // Midnight in UTC-5 is 05:00 UTC
        let start = FixedOffset::west_opt(5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2022, 1, 1, 0, 0, 0)
            .unwrap();
        let now = Utc.with_ymd_and_hms(2022, 1, 2, 4, 59, 59).unwrap();
        assert_eq!(get_day(now, start).unwrap(), 1);
        let now = Utc.with_ymd_and_hms(2022, 1, 2, 5, 0, 0).unwrap();
        assert_eq!(get_day(now, start).unwrap(), 2);
    }

    #[test]
    fn get_day_fails_before_start() {
        let now = Utc.with_ymd_and_hms(2021, 12, 31, 23, 0, 0).unwrap();
        assert!(matches!(
            get_day(now, start()),
            Err(Error::StartDateInFuture { .. })
        ));
    }

    #[test]
    fn game_ends_when_next_day_begins() {
        let game = get_game_for_day(1, start(), &WORDS).unwrap();
        let before = Utc.with_ymd_and_hms(2022, 1, 1, 23, 59, 59).unwrap();
        let after = Utc.with_ymd_and_hms(2022, 1, 2, 0, 0, 0).unwrap();
        assert!(!game.has_ended(before));
        assert!(game.has_ended(after));
        assert_eq!(get_day(after, start()).unwrap(), game.day() + 1);
    }
}
