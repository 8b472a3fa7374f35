//! Guess path review
//!
//! Walks a path of guesses against a target, scoring each guess and
//! narrowing the candidate pool with its feedback.

use super::feedback::Feedback;
use super::filter::filter_pool;
use super::word::{Word, WordError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised before any review work starts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },
}

impl ReviewError {
    fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// A review request as supplied by the CLI or HTTP adapters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRequest {
    #[serde(alias = "target_word")]
    pub target: String,
    #[serde(default)]
    pub path: Vec<String>,
}

impl ReviewRequest {
    #[must_use]
    pub fn new(target: impl Into<String>, path: Vec<String>) -> Self {
        Self {
            target: target.into(),
            path,
        }
    }
}

/// Outcome of one scored guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRecord {
    pub guess: String,
    pub feedback: Feedback,
    pub pool_size_before: usize,
    pub pool_size_after: usize,
}

impl GuessRecord {
    /// Number of candidates this guess eliminated, zero if the sizes are inverted
    #[must_use]
    pub const fn removed(&self) -> usize {
        self.pool_size_before.saturating_sub(self.pool_size_after)
    }
}

/// Ordered records for every guess scored before the target was reached
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewReport {
    pub records: Vec<GuessRecord>,
}

impl ReviewReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Pool size left after the last scored guess, if any
    #[must_use]
    pub fn final_pool_size(&self) -> Option<usize> {
        self.records.last().map(|r| r.pool_size_after)
    }
}

/// Reviews guess paths against a fixed starting pool
///
/// Holds only a shared borrow of the pool, so one reviewer can serve many
/// concurrent reviews.
#[derive(Debug, Clone, Copy)]
pub struct Reviewer<'a> {
    pool: &'a [Word],
}

impl<'a> Reviewer<'a> {
    #[must_use]
    pub const fn new(pool: &'a [Word]) -> Self {
        Self { pool }
    }

    /// Size of the starting pool
    #[must_use]
    pub const fn pool_size(&self) -> usize {
        self.pool.len()
    }

    /// Review a raw request, validating the target and every guess up to the
    /// solving one before any scoring starts
    ///
    /// Guesses after the first one equal to the target are never read.
    ///
    /// # Errors
    ///
    /// Returns `ReviewError::InvalidInput` if the target is empty, or if the
    /// target or a guess up to the solving one is not a five-letter word.
    pub fn review(&self, request: &ReviewRequest) -> Result<ReviewReport, ReviewError> {
        let target = parse_target(&request.target)?;

        let mut path = Vec::with_capacity(request.path.len());
        for (i, guess) in request.path.iter().enumerate() {
            let word = Word::new(guess.trim())
                .map_err(|e| ReviewError::invalid(format!("guess {}", i + 1), word_reason(guess, &e)))?;
            let solved = word == target;
            path.push(word);
            if solved {
                break;
            }
        }

        Ok(self.review_words(&target, &path))
    }

    /// Review an already validated path
    ///
    /// Stops at the first guess equal to the target without recording it.
    #[must_use]
    pub fn review_words(&self, target: &Word, path: &[Word]) -> ReviewReport {
        let mut pool: Vec<&Word> = self.pool.iter().collect();
        let mut records = Vec::with_capacity(path.len());

        for guess in path {
            if guess == target {
                debug!(guess = %guess, scored = records.len(), "target reached, stopping review");
                break;
            }

            let feedback = Feedback::score(guess, target);
            let pool_size_before = pool.len();
            pool = filter_pool(guess, &feedback, &pool);

            records.push(GuessRecord {
                guess: guess.text().to_string(),
                feedback,
                pool_size_before,
                pool_size_after: pool.len(),
            });
        }

        debug!(target_word = %target, records = records.len(), "review finished");
        ReviewReport { records }
    }
}

fn parse_target(raw: &str) -> Result<Word, ReviewError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ReviewError::invalid("target", "target word is required"));
    }
    Word::new(trimmed).map_err(|e| ReviewError::invalid("target", word_reason(raw, &e)))
}

fn word_reason(raw: &str, err: &WordError) -> String {
    format!("{raw:?}: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn pool(texts: &[&str]) -> Vec<Word> {
        words_from_slice(texts)
    }

    fn request(target: &str, path: &[&str]) -> ReviewRequest {
        ReviewRequest::new(target, path.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn empty_path_yields_empty_report() {
        let words = pool(&["crane", "slate"]);
        let report = Reviewer::new(&words).review(&request("crane", &[])).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.final_pool_size(), None);
    }

    #[test]
    fn first_guess_solving_yields_empty_report() {
        let words = pool(&["crane", "slate", "train"]);
        let report = Reviewer::new(&words)
            .review(&request("crane", &["crane", "slate"]))
            .unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn stops_at_solving_guess() {
        let words = pool(&["brain", "crane", "drain", "grain", "train"]);
        let report = Reviewer::new(&words)
            .review(&request("grain", &["stain", "grain", "train"]))
            .unwrap();

        assert_eq!(report.len(), 1);
        let record = &report.records[0];
        assert_eq!(record.guess, "stain");
        assert_eq!(record.feedback.to_string(), "XX$$$");
        assert_eq!(record.pool_size_before, 5);
        assert_eq!(record.pool_size_after, 3);
        assert_eq!(record.removed(), 2);
    }

    #[test]
    fn pool_threads_between_guesses() {
        let words = pool(&["brain", "crane", "drain", "grain", "train", "stair"]);
        let report = Reviewer::new(&words)
            .review(&request("grain", &["stain", "drain"]))
            .unwrap();

        assert_eq!(report.len(), 2);
        assert_eq!(report.records[0].pool_size_after, 3);
        assert_eq!(report.records[1].pool_size_before, 3);
        // d absent, r a i n in place: brain and grain remain
        assert_eq!(report.records[1].feedback.to_string(), "X$$$$");
        assert_eq!(report.records[1].pool_size_after, 2);
        assert_eq!(report.final_pool_size(), Some(2));
    }

    #[test]
    fn zero_candidates_is_a_valid_record() {
        // target outside the pool
        let words = pool(&["crane", "slate"]);
        let report = Reviewer::new(&words)
            .review(&request("bumpy", &["crane"]))
            .unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(report.records[0].pool_size_before, 2);
        assert_eq!(report.records[0].pool_size_after, 0);
    }

    #[test]
    fn guesses_normalized_before_comparison() {
        let words = pool(&["crane", "slate"]);
        let report = Reviewer::new(&words)
            .review(&request("Crane", &["CRANE"]))
            .unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn empty_target_is_invalid_input() {
        let words = pool(&["crane"]);
        let err = Reviewer::new(&words)
            .review(&request("", &["crane"]))
            .unwrap_err();
        assert!(matches!(err, ReviewError::InvalidInput { ref field, .. } if field == "target"));
    }

    #[test]
    fn malformed_target_is_invalid_input() {
        let words = pool(&["crane"]);
        for target in ["cranes", "cr4ne", "abc"] {
            let result = Reviewer::new(&words).review(&request(target, &[]));
            assert!(result.is_err(), "target {target:?} should be rejected");
        }
    }

    #[test]
    fn malformed_guess_is_invalid_input() {
        let words = pool(&["crane"]);
        let err = Reviewer::new(&words)
            .review(&request("crane", &["slate", "sl4te"]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid guess 2: \"sl4te\": word contains non-alphabetic characters"
        );
    }

    #[test]
    fn guesses_after_solving_one_are_not_validated() {
        let words = pool(&["crane"]);
        let report = Reviewer::new(&words)
            .review(&request("crane", &["crane", "xx"]))
            .unwrap();
        assert!(report.is_empty());

        let words = pool(&["crane", "slate", "train"]);
        let report = Reviewer::new(&words)
            .review(&request("crane", &["train", "CRANE", "sl4te"]))
            .unwrap();
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn malformed_guess_before_solving_one_is_rejected() {
        let words = pool(&["crane"]);
        let result = Reviewer::new(&words).review(&request("crane", &["xx", "crane"]));
        assert!(matches!(result, Err(ReviewError::InvalidInput { ref field, .. }) if field == "guess 1"));
    }

    #[test]
    fn removed_saturates_on_inverted_sizes() {
        let record: GuessRecord = serde_json::from_str(
            r#"{"guess": "train", "feedback": "X$$X@", "poolSizeBefore": 1, "poolSizeAfter": 2}"#,
        )
        .unwrap();
        assert_eq!(record.removed(), 0);
    }

    #[test]
    fn report_serializes_with_wire_field_names() {
        let words = pool(&["crane", "train"]);
        let report = Reviewer::new(&words)
            .review(&request("crane", &["train"]))
            .unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "records": [{
                    "guess": "train",
                    "feedback": "X$$X@",
                    "poolSizeBefore": 2,
                    "poolSizeAfter": 1,
                }]
            })
        );
    }

    #[test]
    fn request_accepts_target_word_alias() {
        let req: ReviewRequest =
            serde_json::from_str(r#"{"target_word": "crane", "path": ["slate"]}"#).unwrap();
        assert_eq!(req, request("crane", &["slate"]));

        let req: ReviewRequest = serde_json::from_str(r#"{"target": "crane"}"#).unwrap();
        assert!(req.path.is_empty());
    }
}
