//! Wordle Pal
//!
//! Reviews a path of Wordle guesses against a known answer and reports, for
//! each guess, its feedback and how far it narrowed the candidate pool.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_pal::core::ReviewRequest;
//! use wordle_pal::wordlists::review;
//!
//! let request = ReviewRequest::new("crane", vec!["train".into(), "crane".into()]);
//! let report = review(&request).unwrap();
//!
//! assert_eq!(report.records.len(), 1);
//! assert_eq!(report.records[0].feedback.to_string(), "X$$X@");
//! ```

// Core domain types and engine
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Report presentation
pub mod output;

// HTTP front end
pub mod server;

// Tracing setup
pub mod logging;
