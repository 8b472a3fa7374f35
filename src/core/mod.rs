//! Core engine: scoring, filtering and path review
//!
//! Everything here is pure and synchronous. Adapters in `commands`, `server`
//! and `output` feed requests in and render reports out.

mod feedback;
mod filter;
mod review;
mod word;

pub use feedback::{Feedback, LetterFeedback, letter_in_target};
pub use filter::{FilterRules, filter_pool};
pub use review::{GuessRecord, ReviewError, ReviewReport, ReviewRequest, Reviewer};
pub use word::{WORD_LEN, Word, WordError};
