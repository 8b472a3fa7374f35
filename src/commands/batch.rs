//! Batch review - many guess paths from one file
//!
//! Each line holds `target: guess,guess,...`. Paths are reviewed in parallel
//! against the same read-only pool.

use super::review::parse_path;
use crate::core::{ReviewError, ReviewReport, ReviewRequest, Reviewer};
use crate::output::formatters::percent_removed;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// Problems with a single batch line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    #[error("line {line}: expected `target: guess,guess,...`")]
    MissingSeparator { line: usize },
    #[error("line {line}: {source}")]
    Review {
        line: usize,
        #[source]
        source: ReviewError,
    },
}

/// One parsed batch line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub line: usize,
    pub request: ReviewRequest,
}

/// Review outcome for one line
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub line: usize,
    pub target: String,
    pub result: Result<ReviewReport, BatchError>,
}

/// Totals across a batch
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub reviewed: usize,
    pub failed: usize,
    pub guesses_scored: usize,
    /// Mean percentage of the pool removed per scored guess
    pub average_removed: f64,
}

/// Parse batch file content, skipping blank lines and `#` comments
#[must_use]
pub fn parse_batch(content: &str) -> Vec<Result<BatchEntry, BatchError>> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let line = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }

            let Some((target, path)) = trimmed.split_once(':') else {
                return Some(Err(BatchError::MissingSeparator { line }));
            };

            Some(Ok(BatchEntry {
                line,
                request: ReviewRequest::new(target.trim().to_lowercase(), parse_path(path)),
            }))
        })
        .collect()
}

/// Review every parsed line in parallel
///
/// Results come back in input order. Pass `show_progress = false` to keep
/// the terminal quiet (tests, JSON output).
#[must_use]
pub fn run_batch(
    entries: Vec<Result<BatchEntry, BatchError>>,
    reviewer: &Reviewer<'_>,
    show_progress: bool,
) -> Vec<BatchOutcome> {
    info!(paths = entries.len(), pool = reviewer.pool_size(), "starting batch review");

    let pb = if show_progress {
        let pb = ProgressBar::new(entries.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<BatchOutcome> = entries
        .into_par_iter()
        .map(|entry| {
            let outcome = match entry {
                Ok(BatchEntry { line, request }) => BatchOutcome {
                    line,
                    result: reviewer
                        .review(&request)
                        .map_err(|source| BatchError::Review { line, source }),
                    target: request.target,
                },
                Err(err) => BatchOutcome {
                    line: error_line(&err),
                    target: String::new(),
                    result: Err(err),
                },
            };
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");
    debug!(outcomes = outcomes.len(), "batch review finished");
    outcomes
}

const fn error_line(err: &BatchError) -> usize {
    match err {
        BatchError::MissingSeparator { line } | BatchError::Review { line, .. } => *line,
    }
}

/// Aggregate a batch run
#[must_use]
pub fn summarize(outcomes: &[BatchOutcome]) -> BatchSummary {
    let reports: Vec<&ReviewReport> = outcomes
        .iter()
        .filter_map(|o| o.result.as_ref().ok())
        .collect();

    let percentages: Vec<f64> = reports
        .iter()
        .copied()
        .flat_map(|report| &report.records)
        .map(|r| percent_removed(r.pool_size_before, r.pool_size_after))
        .collect();

    let average_removed = if percentages.is_empty() {
        0.0
    } else {
        percentages.iter().sum::<f64>() / percentages.len() as f64
    };

    BatchSummary {
        reviewed: reports.len(),
        failed: outcomes.len() - reports.len(),
        guesses_scored: percentages.len(),
        average_removed,
    }
}

/// Render batch results as text
#[must_use]
pub fn format_batch_results(outcomes: &[BatchOutcome], summary: &BatchSummary) -> String {
    let mut lines = Vec::with_capacity(outcomes.len() + 4);

    for outcome in outcomes {
        match &outcome.result {
            Ok(report) => {
                let remaining = report
                    .final_pool_size()
                    .map_or_else(|| "-".to_string(), |n| n.to_string());
                lines.push(format!(
                    "line {:>4}  {}  {} guesses scored, {} candidates left",
                    outcome.line,
                    outcome.target.to_uppercase().bright_yellow(),
                    report.len(),
                    remaining
                ));
            }
            Err(err) => lines.push(format!("{}", err.to_string().red())),
        }
    }

    lines.push(String::new());
    lines.push(format!("Paths reviewed:   {}", summary.reviewed));
    lines.push(format!("Failed lines:     {}", summary.failed));
    lines.push(format!("Guesses scored:   {}", summary.guesses_scored));
    lines.push(format!(
        "Average removal:  {}",
        format!("{:.2}%", summary.average_removed).bright_yellow()
    ));
    lines.join("\n")
}

/// Render batch results as JSON
#[must_use]
pub fn format_batch_json(outcomes: &[BatchOutcome], summary: &BatchSummary) -> String {
    let results: Vec<serde_json::Value> = outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(report) => serde_json::json!({
                "line": outcome.line,
                "target": outcome.target,
                "records": report.records,
            }),
            Err(err) => serde_json::json!({
                "line": outcome.line,
                "error": err.to_string(),
            }),
        })
        .collect();

    let body = serde_json::json!({
        "results": results,
        "summary": summary,
    });
    format!("{body:#}")
}
