//! Word lists
//!
//! The default candidate pool is compiled into the binary and converted to
//! [`Word`]s once per process, then shared read-only.

mod embedded;
pub mod loader;

use crate::core::{ReviewError, ReviewReport, ReviewRequest, Reviewer, Word};
use std::sync::OnceLock;

pub use embedded::{ANSWERS, ANSWERS_COUNT};

static DEFAULT_POOL: OnceLock<Vec<Word>> = OnceLock::new();

/// The default candidate pool, built on first use
pub fn default_pool() -> &'static [Word] {
    DEFAULT_POOL.get_or_init(|| loader::words_from_slice(ANSWERS))
}

/// A reviewer over the default candidate pool
#[must_use]
pub fn default_reviewer() -> Reviewer<'static> {
    Reviewer::new(default_pool())
}

/// Review a request against the default candidate pool
///
/// # Errors
///
/// Returns `ReviewError::InvalidInput` for an empty or malformed target or a
/// malformed guess.
pub fn review(request: &ReviewRequest) -> Result<ReviewReport, ReviewError> {
    default_reviewer().review(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_have_no_duplicates() {
        let unique: std::collections::HashSet<_> = ANSWERS.iter().collect();
        assert_eq!(unique.len(), ANSWERS.len());
    }

    #[test]
    fn default_pool_built_once() {
        let first = default_pool();
        let second = default_pool();
        assert_eq!(first.len(), ANSWERS_COUNT);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn default_pool_contains_common_words() {
        for text in ["crane", "crone", "grade", "crave", "train", "slate"] {
            assert!(
                default_pool().iter().any(|w| w.text() == text),
                "'{text}' missing from default pool"
            );
        }
    }

    #[test]
    fn review_against_default_pool() {
        let request = ReviewRequest::new("crane", vec!["train".into(), "crane".into()]);
        let report = review(&request).unwrap();

        assert_eq!(report.len(), 1);
        let record = &report.records[0];
        assert_eq!(record.feedback.to_string(), "X$$X@");
        assert_eq!(record.pool_size_before, ANSWERS_COUNT);
        assert!(record.pool_size_after >= 1);
        assert!(record.pool_size_after < record.pool_size_before);
    }

    #[test]
    fn concurrent_reviews_share_pool() {
        let handles: Vec<_> = ["crane", "slate", "grade", "crave"]
            .into_iter()
            .map(|target| {
                std::thread::spawn(move || {
                    review(&ReviewRequest::new(target, vec!["train".into()])).unwrap()
                })
            })
            .collect();

        for handle in handles {
            let report = handle.join().unwrap();
            assert_eq!(report.records[0].pool_size_before, ANSWERS_COUNT);
        }
    }
}
