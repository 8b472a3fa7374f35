//! Formatting utilities shared by every presenter

use crate::core::{Feedback, LetterFeedback};

/// Share of the pool removed by a guess, as a percentage
///
/// Returns 0 for an empty starting pool.
#[must_use]
pub fn percent_removed(before: usize, after: usize) -> f64 {
    if before == 0 {
        return 0.0;
    }
    before.saturating_sub(after) as f64 / before as f64 * 100.0
}

/// Format feedback as emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback
        .letters()
        .iter()
        .map(|letter| match letter {
            LetterFeedback::Correct => '🟩',
            LetterFeedback::WrongPosition => '🟨',
            LetterFeedback::NotInWord => '⬜',
        })
        .collect()
}

/// CSS class used by the HTML result fragment
#[must_use]
pub const fn feedback_class(letter: LetterFeedback) -> &'static str {
    match letter {
        LetterFeedback::Correct => "correct",
        LetterFeedback::WrongPosition => "wrong_position",
        LetterFeedback::NotInWord => "wrong",
    }
}

/// Escape text for an HTML element body or attribute
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
