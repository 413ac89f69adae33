//! Formatting utilities for terminal output

use crate::core::{Guess, KeyboardHints, LetterResult};
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// A single letter tile colored by its result
#[must_use]
pub fn letter_tile(letter: char, result: LetterResult) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match result {
        LetterResult::Correct => text.black().on_green().bold(),
        LetterResult::Present => text.black().on_yellow().bold(),
        LetterResult::Incorrect => text.white().on_bright_black(),
        LetterResult::Empty => text.normal(),
    }
}

/// A scored guess as a row of colored tiles
#[must_use]
pub fn guess_row(guess: &Guess) -> String {
    guess
        .letters()
        .map(|(letter, result)| letter_tile(letter, result).to_string())
        .collect()
}

/// The letters typed so far, padded with underscores to the word length
#[must_use]
pub fn pending_row(current_guess: &str, word_length: usize) -> String {
    let typed = current_guess.chars().count();
    current_guess
        .chars()
        .map(|letter| format!(" {} ", letter.to_ascii_uppercase()))
        .chain(std::iter::repeat_n(" _ ".to_string(), word_length.saturating_sub(typed)))
        .collect()
}

/// Keyboard rows with each key colored by its best known hint
#[must_use]
pub fn keyboard_rows(hints: &KeyboardHints) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|letter| letter_tile(letter, hints.get(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent))
        })
        .collect()
}
