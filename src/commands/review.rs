//! Single path review command
//!
//! Turns command-line arguments into a review request and renders the report.

use crate::core::{ReviewError, ReviewReport, ReviewRequest, Reviewer};
use crate::output::{ConsolePresenter, JsonPresenter, ReportPresenter};
use tracing::debug;

/// Options for reviewing one guess path
#[derive(Debug, Clone)]
pub struct ReviewConfig {
    pub target: String,
    pub raw_path: String,
    pub json: bool,
    pub verbose: bool,
}

/// Split a comma separated guess list, lowercasing and dropping blanks
///
/// # Examples
/// ```
/// use wordle_pal::commands::review::parse_path;
///
/// assert_eq!(parse_path("Train, CRANE,,"), vec!["train", "crane"]);
/// ```
#[must_use]
pub fn parse_path(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|guess| guess.trim().to_lowercase())
        .filter(|guess| !guess.is_empty())
        .collect()
}

/// Build the request for `config`
#[must_use]
pub fn build_request(config: &ReviewConfig) -> ReviewRequest {
    ReviewRequest::new(config.target.trim().to_lowercase(), parse_path(&config.raw_path))
}

/// Review the configured path and render it
///
/// # Errors
///
/// Returns `ReviewError::InvalidInput` if the target or a guess is malformed.
pub fn run_review(config: &ReviewConfig, reviewer: &Reviewer<'_>) -> Result<String, ReviewError> {
    let request = build_request(config);
    debug!(target_word = %request.target, path = ?request.path, "command started");

    let report: ReviewReport = reviewer.review(&request)?;
    debug!(count = report.len(), "results returned");

    let rendered = if config.json {
        JsonPresenter.render(&request.target, &report)
    } else {
        ConsolePresenter::new(config.verbose).render(&request.target, &report)
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn config(target: &str, raw_path: &str, json: bool) -> ReviewConfig {
        ReviewConfig {
            target: target.to_string(),
            raw_path: raw_path.to_string(),
            json,
            verbose: false,
        }
    }

    #[test]
    fn parse_path_splits_and_normalizes() {
        assert_eq!(parse_path("train,crane"), vec!["train", "crane"]);
        assert_eq!(parse_path(" SLATE , Crane "), vec!["slate", "crane"]);
        assert!(parse_path("").is_empty());
        assert!(parse_path(",,").is_empty());
    }

    #[test]
    fn build_request_lowercases_target() {
        let request = build_request(&config(" CRANE ", "Train", false));
        assert_eq!(request.target, "crane");
        assert_eq!(request.path, vec!["train"]);
    }

    #[test]
    fn run_review_renders_console() {
        colored::control::set_override(false);
        let words = words_from_slice(&["crane", "train", "brain"]);
        let out = run_review(&config("crane", "train,crane", false), &Reviewer::new(&words)).unwrap();

        assert!(out.contains("Guess \"train\" removed 2 words (66.67%) from the remaining pool."));
    }

    #[test]
    fn run_review_renders_json() {
        let words = words_from_slice(&["crane", "train", "brain"]);
        let out = run_review(&config("crane", "train", true), &Reviewer::new(&words)).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["records"][0]["guess"], "train");
        assert_eq!(value["records"][0]["poolSizeAfter"], 1);
    }

    #[test]
    fn run_review_rejects_empty_target() {
        let words = words_from_slice(&["crane"]);
        assert!(run_review(&config("", "crane", false), &Reviewer::new(&words)).is_err());
    }
}
