//! Per-letter feedback for a scored guess
//!
//! Results have a fixed order of informativeness used when combining
//! feedback from several guesses into keyboard hints:
//! Correct > Present > Incorrect > Empty.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterResult {
    /// Letter is in the solution at this position
    Correct,
    /// Letter is in the solution at another position
    Present,
    /// Letter is not in the solution (or all copies are already accounted for)
    Incorrect,
    /// No information yet
    #[default]
    Empty,
}

impl LetterResult {
    /// Results from most to least informative
    pub const PREFERRED: [Self; 4] = [Self::Correct, Self::Present, Self::Incorrect, Self::Empty];

    /// Position in [`Self::PREFERRED`] (0 is the most informative)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Correct => 0,
            Self::Present => 1,
            Self::Incorrect => 2,
            Self::Empty => 3,
        }
    }

    /// Check if this result is at least as informative as `other`
    ///
    /// Ties count as better; callers that only want to overwrite on strict
    /// improvement compare ranks directly.
    ///
    /// # Examples
    /// ```
    /// use sqwordle::core::LetterResult;
    ///
    /// assert!(LetterResult::Present.is_better_result(LetterResult::Incorrect));
    /// assert!(!LetterResult::Empty.is_better_result(LetterResult::Incorrect));
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_better_result(self, other: Self) -> bool {
        self.rank() <= other.rank()
    }

    /// Share glyph for this result
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Incorrect | Self::Empty => '⬜',
        }
    }

    /// Human readable label (empty for [`LetterResult::Empty`])
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Correct => "Correct",
            Self::Present => "Present",
            Self::Incorrect => "Incorrect",
            Self::Empty => "",
        }
    }
}

impl fmt::Display for LetterResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterResult::{Correct, Empty, Incorrect, Present};

    #[test]
    fn correct_beats_everything() {
        assert!(Correct.is_better_result(Empty));
        assert!(Correct.is_better_result(Incorrect));
        assert!(Correct.is_better_result(Present));
    }

    #[test]
    fn present_beats_incorrect_and_empty() {
        assert!(Present.is_better_result(Empty));
        assert!(Present.is_better_result(Incorrect));
        assert!(!Present.is_better_result(Correct));
    }

    #[test]
    fn incorrect_beats_only_empty() {
        assert!(Incorrect.is_better_result(Empty));
        assert!(!Incorrect.is_better_result(Correct));
        assert!(!Incorrect.is_better_result(Present));
    }

    #[test]
    fn empty_never_preferred() {
        assert!(!Empty.is_better_result(Incorrect));
        assert!(!Empty.is_better_result(Correct));
        assert!(!Empty.is_better_result(Present));
    }

    #[test]
    fn ties_count_as_better() {
        for result in LetterResult::PREFERRED {
            assert!(result.is_better_result(result));
        }
    }

    #[test]
    fn preferred_table_matches_rank() {
        for (i, result) in LetterResult::PREFERRED.iter().enumerate() {
            assert_eq!(usize::from(result.rank()), i);
        }
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&[Correct, Present, Incorrect, Empty]).unwrap();
        assert_eq!(json, r#"["correct","present","incorrect","empty"]"#);
    }

    #[test]
    fn glyphs_and_labels() {
        assert_eq!(Correct.emoji(), '🟩');
        assert_eq!(Present.emoji(), '🟨');
        assert_eq!(Incorrect.emoji(), '⬜');
        assert_eq!(Empty.emoji(), '⬜');
        assert_eq!(Empty.label(), "");
        assert_eq!(Present.label(), "Present");
    }
}
