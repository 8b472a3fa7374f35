//! Report presentation
//!
//! Console, HTML and JSON renderings of review reports.

pub mod display;
pub mod formatters;

pub use display::{ConsolePresenter, HtmlPresenter, JsonPresenter, ReportPresenter};
