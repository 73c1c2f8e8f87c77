//! Output formatting: present aggregated counts as a report.
//!
//! This module handles the fourth and final stage of the pipeline -
//! formatting query results for display. It provides:
//!
//! - **Report**: Header, one row per file, and a summary footer
//! - **ReportRow**: Individual row with label and formatted values
//!
//! Report is a pure presentation layer - it only formats data into strings.
//! Sorting and summing happen in the query stage.
//!
//! ## Example
//!
//! ```rust,ignore
//! use stepcountlib::output::Report;
//!
//! let report = Report::from_all_files(&all);
//! print!("{}", report.to_csv());
//! ```

pub mod report;

pub use report::{Report, ReportRow, FAILED_CELL, HEADERS};
