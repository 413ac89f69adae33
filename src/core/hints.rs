//! Keyboard hint aggregation
//!
//! Combines the feedback of every submitted guess into the single most
//! informative result known for each letter.

use super::{Guess, LetterResult};
use rustc_hash::FxHashMap;

/// Best known result per letter
///
/// Letters that were never guessed are not stored and read back as
/// [`LetterResult::Empty`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHints(FxHashMap<char, LetterResult>);

impl KeyboardHints {
    /// Hint for `letter`, defaulting to [`LetterResult::Empty`]
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> LetterResult {
        self.0.get(&letter).copied().unwrap_or_default()
    }

    /// Record `result` for `letter` if it is strictly more informative
    pub fn record(&mut self, letter: char, result: LetterResult) {
        let current = self.get(letter);
        if result.is_better_result(current) && result != current {
            self.0.insert(letter, result);
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, LetterResult)> + '_ {
        self.0.iter().map(|(&letter, &result)| (letter, result))
    }
}

impl FromIterator<(char, LetterResult)> for KeyboardHints {
    fn from_iter<I: IntoIterator<Item = (char, LetterResult)>>(iter: I) -> Self {
        let mut hints = Self::default();
        for (letter, result) in iter {
            hints.record(letter, result);
        }
        hints
    }
}

/// Collect the best result seen for each letter across `guesses`
///
/// The result does not depend on the order of `guesses`.
///
/// # Examples
/// ```
/// use sqwordle::core::{Guess, LetterResult, collect_keyboard_hints};
///
/// let guesses = [Guess::score("ward", "word").unwrap()];
/// let hints = collect_keyboard_hints(&guesses);
/// assert_eq!(hints.get('w'), LetterResult::Correct);
/// assert_eq!(hints.get('a'), LetterResult::Incorrect);
/// assert_eq!(hints.get('z'), LetterResult::Empty);
/// ```
#[must_use]
pub fn collect_keyboard_hints(guesses: &[Guess]) -> KeyboardHints {
    guesses.iter().flat_map(Guess::letters).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterResult::{Correct, Empty, Incorrect, Present};

    fn guess(word: &str, results: &[LetterResult]) -> Guess {
        Guess::new(word, results.to_vec()).unwrap()
    }

    fn hints(pairs: &[(char, LetterResult)]) -> KeyboardHints {
        pairs.iter().copied().collect()
    }

    #[test]
    fn single_guess() {
        let result = collect_keyboard_hints(&[guess("abc", &[Present; 3])]);
        assert_eq!(result, hints(&[('a', Present), ('b', Present), ('c', Present)]));
    }

    #[test]
    fn disjoint_guesses_merge() {
        let result = collect_keyboard_hints(&[
            guess("abc", &[Present; 3]),
            guess("def", &[Incorrect; 3]),
        ]);
        assert_eq!(
            result,
            hints(&[
                ('a', Present),
                ('b', Present),
                ('c', Present),
                ('d', Incorrect),
                ('e', Incorrect),
                ('f', Incorrect),
            ])
        );
    }

    #[test]
    fn worse_result_does_not_downgrade() {
        let result = collect_keyboard_hints(&[
            guess("abc", &[Present; 3]),
            guess("aba", &[Present, Present, Incorrect]),
        ]);
        assert_eq!(result, hints(&[('a', Present), ('b', Present), ('c', Present)]));
    }

    #[test]
    fn better_result_upgrades() {
        let result = collect_keyboard_hints(&[
            guess("abc", &[Present; 3]),
            guess("cab", &[Correct; 3]),
        ]);
        assert_eq!(result, hints(&[('a', Correct), ('b', Correct), ('c', Correct)]));
    }

    #[test]
    fn order_independent() {
        let first = guess("abc", &[Present; 3]);
        let second = guess("cab", &[Correct; 3]);
        let third = guess("bad", &[Incorrect, Present, Incorrect]);

        let forward = collect_keyboard_hints(&[first.clone(), second.clone(), third.clone()]);
        let backward = collect_keyboard_hints(&[third.clone(), second.clone(), first.clone()]);
        let shuffled = collect_keyboard_hints(&[second, third, first]);

        assert_eq!(forward, backward);
        assert_eq!(forward, shuffled);
        assert_eq!(forward.get('d'), Incorrect);
    }

    #[test]
    fn empty_input_gives_empty_map() {
        let result = collect_keyboard_hints(&[]);
        assert!(result.is_empty());
        assert_eq!(result.get('a'), Empty);
    }

    #[test]
    fn empty_results_are_not_stored() {
        let result = collect_keyboard_hints(&[guess("ab", &[Empty, Incorrect])]);
        assert_eq!(result.len(), 1);
        assert_eq!(result.get('a'), Empty);
        assert_eq!(result.get('b'), Incorrect);
    }
}
