//! Guess feedback calculation and representation
//!
//! Each position of a guess resolves to one of three codes:
//! - `$` = `Correct` (letter at this exact position)
//! - `@` = `WrongPosition` (letter elsewhere in the target)
//! - `X` = `NotInWord` (letter absent from the target)
//!
//! A full [`Feedback`] renders as the five-character code string, e.g. `"X$$X@"`.

use super::word::{WORD_LEN, Word};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::debug;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    Correct,
    WrongPosition,
    NotInWord,
}

impl LetterFeedback {
    /// Wire code for this letter
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => '$',
            Self::WrongPosition => '@',
            Self::NotInWord => 'X',
        }
    }

    /// Parse a wire code, accepting `x` in either case
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            '$' => Some(Self::Correct),
            '@' => Some(Self::WrongPosition),
            'X' | 'x' => Some(Self::NotInWord),
            _ => None,
        }
    }
}

/// Feedback vector for a whole guess, one entry per letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LEN]);

impl Feedback {
    /// All letters correct
    pub const SOLVED: Self = Self([LetterFeedback::Correct; WORD_LEN]);

    /// Per-position feedback in guess order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_LEN] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Score `guess` against `target`
    ///
    /// Exact position matches are `Correct`. Any other letter the target
    /// contains is `WrongPosition`, with no cap on how many times a repeated
    /// guess letter can be marked that way (see [`letter_in_target`]).
    ///
    /// # Examples
    /// ```
    /// use wordle_pal::core::{Feedback, Word};
    ///
    /// let guess = Word::new("train").unwrap();
    /// let target = Word::new("crane").unwrap();
    /// assert_eq!(Feedback::score(&guess, &target).to_string(), "X$$X@");
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Self {
        debug!(guess = %guess, target_word = %target, "scoring word");

        let mut result = [LetterFeedback::NotInWord; WORD_LEN];
        for (position, slot) in result.iter_mut().enumerate() {
            let guess_letter = guess.letter_at(position);
            let target_letter = target.letter_at(position);

            *slot = if guess_letter == target_letter {
                LetterFeedback::Correct
            } else if letter_in_target(guess_letter, target) {
                LetterFeedback::WrongPosition
            } else {
                LetterFeedback::NotInWord
            };

            debug!(
                position,
                guess_letter = %char::from(guess_letter),
                target_letter = %char::from(target_letter),
                feedback = ?slot,
                "letter scored"
            );
        }

        let feedback = Self(result);
        debug!(guess = %guess, target_word = %target, result = %feedback, "scoring finished");
        feedback
    }
}

/// Whether a mismatched guess letter earns `WrongPosition`
///
/// True whenever the target contains the letter at all. Repeated guess
/// letters are not rationed against the target's letter counts, so `"speed"`
/// against `"crane"` marks both e's. Replace this predicate to get the
/// stricter count-aware rule.
#[inline]
#[must_use]
pub fn letter_in_target(letter: u8, target: &Word) -> bool {
    target.has_letter(letter)
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{}", letter.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let codes: Vec<LetterFeedback> = s
            .chars()
            .map(LetterFeedback::from_code)
            .collect::<Option<_>>()
            .ok_or_else(|| format!("Invalid feedback code: {s}"))?;

        let letters: [LetterFeedback; WORD_LEN] = codes
            .try_into()
            .map_err(|_| format!("Feedback must be {WORD_LEN} codes long: {s}"))?;

        Ok(Self(letters))
    }
}

impl Serialize for Feedback {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Feedback {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
