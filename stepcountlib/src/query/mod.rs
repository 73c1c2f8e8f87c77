//! Query processing: sort and aggregate per-file results.
//!
//! This module handles the third stage of the pipeline - turning the list of
//! per-file records into an ordered list plus totals. It provides:
//!
//! - **Options**: Sorting configuration (`SortTarget`, `SortType`, `Sorting`)
//! - **Aggregate**: `AllFilesStepCountData`, sums over successful records
//!
//! ## Example
//!
//! ```rust,ignore
//! use stepcountlib::query::{AllFilesStepCountData, Sorting};
//!
//! let all = AllFilesStepCountData::new(records, Sorting::by_total());
//! println!("{}", all.to_comma_delimited());
//! ```

pub mod aggregate;
pub mod options;

pub use aggregate::{sort_step_count_data, AllFilesStepCountData, SUMMARY_LABEL};
pub use options::{SortTarget, SortType, Sorting};
