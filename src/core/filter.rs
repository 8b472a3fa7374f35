//! Candidate pool filtering
//!
//! Turns a guess and its feedback into a set of constraints, then keeps only
//! the pool words that satisfy all of them.

use super::feedback::{Feedback, LetterFeedback};
use super::word::Word;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Constraints derived from one guess and its feedback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterRules {
    /// Position → letter required there (`Correct`)
    placed: FxHashMap<usize, u8>,
    /// Letter → position it must avoid (`WrongPosition`)
    ///
    /// Keyed by letter, so a letter marked `WrongPosition` twice keeps only
    /// its last position.
    misplaced: FxHashMap<u8, usize>,
    /// Letters that must not appear anywhere (`NotInWord`)
    absent: Vec<u8>,
}

impl FilterRules {
    /// Build the rules for `guess` given its `feedback`
    #[must_use]
    pub fn from_feedback(guess: &Word, feedback: &Feedback) -> Self {
        let mut rules = Self::default();

        for (position, kind) in feedback.letters().iter().enumerate() {
            let letter = guess.letter_at(position);
            match kind {
                LetterFeedback::Correct => {
                    rules.placed.insert(position, letter);
                }
                LetterFeedback::WrongPosition => {
                    rules.misplaced.insert(letter, position);
                }
                LetterFeedback::NotInWord => rules.absent.push(letter),
            }
        }

        debug!(
            must_match = ?rules.placed,
            must_contain_not_at = ?rules.misplaced,
            must_not_contain = ?rules.absent,
            "filtering rules prepared"
        );
        rules
    }

    /// Whether `candidate` could have produced the feedback these rules came from
    #[must_use]
    pub fn allows(&self, candidate: &Word) -> bool {
        let letters = candidate.letters();

        if self
            .placed
            .iter()
            .any(|(&position, &letter)| letters[position] != letter)
        {
            return false;
        }

        if self
            .misplaced
            .iter()
            .any(|(&letter, &position)| !candidate.has_letter(letter) || letters[position] == letter)
        {
            return false;
        }

        !self
            .absent
            .iter()
            .any(|&letter| candidate.has_letter(letter))
    }
}

/// Keep the pool words consistent with `feedback` for `guess`
///
/// Relative order is preserved and the input is left untouched. An empty
/// result is a valid outcome.
#[must_use]
pub fn filter_pool<'a>(guess: &Word, feedback: &Feedback, pool: &[&'a Word]) -> Vec<&'a Word> {
    let rules = FilterRules::from_feedback(guess, feedback);

    let filtered: Vec<&'a Word> = pool
        .iter()
        .copied()
        .filter(|candidate| rules.allows(candidate))
        .collect();

    debug!(
        old_count = pool.len(),
        new_count = filtered.len(),
        "filtering finished"
    );
    filtered
}
