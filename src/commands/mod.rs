//! Command implementations

pub mod batch;
pub mod review;

pub use batch::{BatchSummary, format_batch_json, format_batch_results, parse_batch, run_batch, summarize};
pub use review::{ReviewConfig, run_review};
