//! End-to-end play through the public API

use chrono::{DateTime, TimeZone, Utc};
use sqwordle::clock::FixedClock;
use sqwordle::config::GameConfig;
use sqwordle::core::LetterResult::{Correct, Incorrect, Present};
use sqwordle::game::{GameStatus, Session, Submission, share_message};
use sqwordle::storage::{FileStorage, MemoryStorage, Storage};
use sqwordle::wordlists::loader::words_from_slice;
use sqwordle::{Error, commands::enter_word};

fn words() -> Vec<String> {
    // Day 1: "word", day 2: "miss"
    words_from_slice(&["word", "miss", "draw", "ward", "wood"])
}

fn config() -> GameConfig {
    GameConfig::from_parts("2022-01-01", "-05:00", 10, "https://sqwordle.example").unwrap()
}

/// 2022-01-01 20:00 at -05:00
fn first_evening() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 1, 2, 1, 0, 0).unwrap()
}

fn open<S: Storage>(now: DateTime<Utc>, storage: S) -> Session<S> {
    let game = config().game_at(&FixedClock(now), &words()).unwrap();
    Session::load(game, storage)
}

fn play<S: Storage>(session: &mut Session<S>, word: &str) -> Submission {
    for letter in word.chars() {
        assert!(session.append_letter(letter));
    }
    session.submit()
}

#[test]
fn winning_game_produces_share_text() {
    let mut session = open(first_evening(), MemoryStorage::new());
    assert_eq!(session.game().day(), 1);
    assert_eq!(session.game().solution(), "word");

    assert_eq!(play(&mut session, "miss"), Submission::Accepted(GameStatus::Playing));
    assert_eq!(play(&mut session, "draw"), Submission::Accepted(GameStatus::Playing));
    assert_eq!(play(&mut session, "ward"), Submission::Accepted(GameStatus::Playing));
    assert_eq!(play(&mut session, "word"), Submission::Accepted(GameStatus::Won));

    assert_eq!(session.guesses()[1].results(), [Present, Present, Incorrect, Present]);
    assert_eq!(session.guesses()[2].results(), [Correct, Correct, Incorrect, Correct]);

    let hints = session.keyboard_hints();
    assert_eq!(hints.get('w'), Correct);
    assert_eq!(hints.get('m'), Incorrect);

    let share = session.share_text();
    assert_eq!(
        share,
        "SQWORDLE #1 4/10\n\n⬜⬜⬜⬜\n🟨🟨⬜🟨\n🟩🟩⬜🟩\n🟩🟩🟩🟩"
    );
    assert_eq!(
        share_message(&share, "https://sqwordle.example"),
        format!("{share} https://sqwordle.example")
    );
}

#[test]
fn unknown_word_does_not_use_an_attempt() {
    let mut session = open(first_evening(), MemoryStorage::new());
    assert_eq!(play(&mut session, "xxxx"), Submission::NotAWord("xxxx".to_string()));
    assert!(session.guesses().is_empty());
    assert_eq!(session.attempts_remaining(), 9);
}

#[test]
fn progress_is_restored_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut session = open(first_evening(), FileStorage::new(&path));
    assert_eq!(enter_word(&mut session, "miss"), Submission::Accepted(GameStatus::Playing));
    session.append_letter('w');
    drop(session);

    let restored = open(first_evening(), FileStorage::new(&path));
    assert_eq!(restored.guesses().len(), 1);
    assert_eq!(restored.guesses()[0].word(), "miss");
    assert_eq!(restored.current_guess(), "w");
}

#[test]
fn next_day_starts_fresh_and_keeps_yesterday() {
    let mut storage = MemoryStorage::new();

    let mut today = open(first_evening(), &mut storage);
    enter_word(&mut today, "word");
    assert_eq!(today.status(), GameStatus::Won);
    drop(today);

    // 2022-01-02 00:00 at -05:00
    let midnight = Utc.with_ymd_and_hms(2022, 1, 2, 5, 0, 0).unwrap();
    let tomorrow = open(midnight, &mut storage);
    assert_eq!(tomorrow.game().day(), 2);
    assert_eq!(tomorrow.game().solution(), "miss");
    assert_eq!(tomorrow.status(), GameStatus::Playing);
    assert!(tomorrow.guesses().is_empty());
    drop(tomorrow);

    let yesterday = open(first_evening(), &mut storage);
    assert_eq!(yesterday.status(), GameStatus::Won);
}

#[test]
fn start_date_in_future_is_an_error() {
    let before_start = Utc.with_ymd_and_hms(2021, 12, 31, 12, 0, 0).unwrap();
    let result = config().game_at(&FixedClock(before_start), &words());
    assert!(matches!(result, Err(Error::StartDateInFuture { .. })));
}
