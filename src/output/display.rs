//! Presenters for review reports
//!
//! Every front end renders a [`ReviewReport`] through [`ReportPresenter`], so
//! the percentage and feedback formatting live in one place.

use super::formatters::{
    create_progress_bar, escape_html, feedback_class, feedback_to_emoji, percent_removed,
};
use crate::core::ReviewReport;
use colored::Colorize;
use std::fmt::Write;

/// Renders a review report for a particular audience
pub trait ReportPresenter {
    fn render(&self, target: &str, report: &ReviewReport) -> String;
}

/// Colored plain-text output for the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePresenter {
    /// Show the emoji grid and a removal bar under each guess
    pub verbose: bool,
}

impl ConsolePresenter {
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl ReportPresenter for ConsolePresenter {
    fn render(&self, target: &str, report: &ReviewReport) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Target: {}",
            target.to_uppercase().bright_yellow().bold()
        );

        if report.is_empty() {
            let _ = writeln!(out, "{}", "No guesses to review.".bright_black());
            return out;
        }

        for record in &report.records {
            let pct = percent_removed(record.pool_size_before, record.pool_size_after);
            let _ = writeln!(
                out,
                "Guess {:?} removed {} words ({}) from the remaining pool.",
                record.guess,
                record.removed().to_string().green(),
                format!("{pct:.2}%").bright_yellow()
            );

            if self.verbose {
                let _ = writeln!(
                    out,
                    "  {} {}  {} → {}  [{}]",
                    record.feedback,
                    feedback_to_emoji(&record.feedback),
                    record.pool_size_before,
                    record.pool_size_after,
                    create_progress_bar(pct, 100.0, 20).cyan()
                );
            }
        }

        if let Some(remaining) = report.final_pool_size() {
            let _ = writeln!(out, "{remaining} candidates remain.");
        }
        out
    }
}

/// HTML fragment swapped into the analysis page
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlPresenter;

impl ReportPresenter for HtmlPresenter {
    fn render(&self, target: &str, report: &ReviewReport) -> String {
        let mut out = String::from("<div class=\"result\">\n  <div class=\"target\">\n");
        for letter in target.trim().to_lowercase().chars() {
            let _ = writeln!(
                out,
                "    <span class=\"letter correct\">{}</span>",
                escape_html(&letter.to_string())
            );
        }
        out.push_str("  </div>\n");

        for record in &report.records {
            out.push_str("  <div class=\"guess\">\n    <div class=\"letters\">\n");
            for (letter, feedback) in record.guess.chars().zip(record.feedback.letters()) {
                let _ = writeln!(
                    out,
                    "      <span class=\"letter {}\">{}</span>",
                    feedback_class(*feedback),
                    escape_html(&letter.to_string())
                );
            }
            let _ = writeln!(
                out,
                "    </div>\n    <div class=\"counts\">{} &rarr; {} ({:.2}% removed)</div>\n  </div>",
                record.pool_size_before,
                record.pool_size_after,
                percent_removed(record.pool_size_before, record.pool_size_after)
            );
        }

        out.push_str("</div>\n");
        out
    }
}

/// JSON output matching the review wire format
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPresenter;

impl ReportPresenter for JsonPresenter {
    fn render(&self, target: &str, report: &ReviewReport) -> String {
        let body = serde_json::json!({
            "target": target,
            "records": report.records,
        });
        format!("{body:#}")
    }
}
