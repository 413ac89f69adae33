//! Core scoring types
//!
//! Pure, dependency-light building blocks: letter results, guess scoring and
//! keyboard hint aggregation. Nothing here touches time, storage or I/O.

mod alphabet;
mod guess;
mod hints;
mod result;

pub use alphabet::{ALPHABET, normalize_letter};
pub use guess::{Guess, count_letters, evaluate_guess};
pub use hints::{KeyboardHints, collect_keyboard_hints};
pub use result::LetterResult;
