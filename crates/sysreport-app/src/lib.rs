//! Use case orchestration for sysreport.
//!
//! This crate sequences the domain and render layers into the two
//! operations callers see: the full diagnostics report and the
//! subscriber report. It is intentionally thin; the CLI crate depends on
//! this and only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod report;
mod subscribers;

pub use report::{run_report, ReportInput};
pub use subscribers::run_subscriber_report;
