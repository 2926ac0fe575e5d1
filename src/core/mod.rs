//! Stage-history reconstruction and report generation.
//!
//! raw actions → [`extractor`] → [`intervals`] → [`filter`] → [`reports`]

pub mod extractor;
pub mod filter;
pub mod intervals;
pub mod reports;
pub mod runner;

pub use extractor::extract_events;
pub use filter::{DateRange, filter_by_date_range};
pub use intervals::build_intervals;
pub use runner::{ReportKind, run_report};
