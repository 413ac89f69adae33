//! Scoring a guess against the solution
//!
//! Implements the duplicate-letter rule: a letter is credited (Correct or
//! Present) at most as many times as it occurs in the solution, with exact
//! position matches claiming their copies first.

use super::LetterResult;
use crate::error::{Error, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A submitted word together with its per-letter feedback
///
/// `results` always has one entry per letter of `word`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGuess")]
pub struct Guess {
    results: Vec<LetterResult>,
    word: String,
}

#[derive(Deserialize)]
struct RawGuess {
    results: Vec<LetterResult>,
    word: String,
}

impl TryFrom<RawGuess> for Guess {
    type Error = Error;

    fn try_from(raw: RawGuess) -> Result<Self> {
        Self::new(raw.word, raw.results)
    }
}

impl Guess {
    /// Pair a word with already computed results
    ///
    /// # Errors
    /// Returns `Error::InvalidGameState` if the lengths differ.
    pub fn new(word: impl Into<String>, results: Vec<LetterResult>) -> Result<Self> {
        let word = word.into();
        let letters = word.chars().count();
        if letters != results.len() {
            return Err(Error::InvalidGameState(format!(
                "guess {word:?} has {letters} letters but {} results",
                results.len()
            )));
        }

        Ok(Self { results, word })
    }

    /// Score `word` against `solution`
    ///
    /// # Errors
    /// Returns `Error::InvalidGuess` if the word lengths differ.
    pub fn score(word: &str, solution: &str) -> Result<Self> {
        let results = evaluate_guess(word, solution)?;
        Ok(Self {
            results,
            word: word.to_string(),
        })
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn results(&self) -> &[LetterResult] {
        &self.results
    }

    /// Letters paired with their results, in position order
    pub fn letters(&self) -> impl Iterator<Item = (char, LetterResult)> + '_ {
        self.word.chars().zip(self.results.iter().copied())
    }

    /// Check if every letter is [`LetterResult::Correct`]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.results.iter().all(|&r| r == LetterResult::Correct)
    }
}

/// Count occurrences of each letter in `word`
///
/// # Examples
/// ```
/// use sqwordle::core::count_letters;
///
/// let counts = count_letters("aab");
/// assert_eq!(counts[&'a'], 2);
/// assert_eq!(counts[&'b'], 1);
/// ```
#[must_use]
pub fn count_letters(word: &str) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for letter in word.chars() {
        *counts.entry(letter).or_insert(0) += 1;
    }
    counts
}

/// Score `guess` letter by letter against `solution`
///
/// # Algorithm
/// 1. First pass: mark exact matches Correct and remove them from the pool
/// 2. Second pass: mark remaining letters Present while the pool still holds
///    a copy, otherwise Incorrect
///
/// # Errors
/// Returns `Error::InvalidGuess` if `guess` and `solution` differ in length.
///
/// # Examples
/// ```
/// use sqwordle::core::{LetterResult, evaluate_guess};
/// use LetterResult::{Correct, Incorrect};
///
/// let results = evaluate_guess("salve", "solve").unwrap();
/// assert_eq!(results, [Correct, Incorrect, Correct, Correct, Correct]);
/// ```
pub fn evaluate_guess(guess: &str, solution: &str) -> Result<Vec<LetterResult>> {
    let guess_letters: Vec<char> = guess.chars().collect();
    let solution_letters: Vec<char> = solution.chars().collect();

    if guess_letters.len() != solution_letters.len() {
        return Err(Error::InvalidGuess {
            guess: guess.to_string(),
            expected: solution_letters.len(),
            actual: guess_letters.len(),
        });
    }

    let mut available = count_letters(solution);
    let mut results = vec![LetterResult::Incorrect; guess_letters.len()];

    // First pass: exact positions
    for ((result, &letter), &expected) in results
        .iter_mut()
        .zip(&guess_letters)
        .zip(&solution_letters)
    {
        if letter == expected {
            *result = LetterResult::Correct;
            if let Some(count) = available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: right letter, wrong position
    for (result, letter) in results.iter_mut().zip(&guess_letters) {
        if *result == LetterResult::Correct {
            continue;
        }

        if let Some(count) = available.get_mut(letter)
            && *count > 0
        {
            *result = LetterResult::Present;
            *count -= 1;
        }
    }

    Ok(results)
}
