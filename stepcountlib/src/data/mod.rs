//! Data collection: classify source lines and collect statistics.
//!
//! This module handles the second stage of the pipeline - reading source
//! files and classifying each line. It provides:
//!
//! - **Patterns**: Per-language comment and literal delimiters (`Language`)
//! - **Classifier**: The line state machine (`scan_line`, `LineClassifier`)
//! - **Statistics**: Per-file records (`StepCounts`, `StepCountData`)
//! - **Counting**: High-level API (`count_source`, `count_file`, `count_paths`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use stepcountlib::data::{count_paths, CountOptions};
//!
//! let result = count_paths(&["src"], CountOptions::new())?;
//! println!("Executable lines: {}", result.sum().exec);
//! ```

pub mod classifier;
pub mod counter;
pub mod pattern;
pub mod stats;

pub use classifier::{scan_line, LineCategory, LineClassifier, ScanState};
pub use counter::{
    collect_files, count_file, count_files, count_paths, count_source, read_source, CountOptions,
};
pub use pattern::{CommentPatternMatch, Delimiters, Language, Literal};
pub use stats::{StepCountData, StepCounts};
