//! # stepcountlib
//!
//! A step counter library: classifies every line of a source file as
//! executable, comment or blank, and aggregates the counts per file and
//! across a file set.
//!
//! ## Overview
//!
//! Comment syntax is a per-language strategy ([`CommentPatternMatch`]). The
//! classifier scans each line with an explicit cross-line state, so block
//! comments and multi-line literals spanning several lines are handled, and
//! comment markers inside string literals are ignored. Built-in languages:
//!
//! - **Java** (`.java`)
//! - **C#** (`.cs`), including verbatim and raw strings
//! - **C/C++** (`.c`, `.h`, `.cpp`, ...)
//! - **JavaScript/TypeScript** (`.js`, `.ts`, ...), including template literals
//! - **Go** (`.go`), including raw strings
//! - **Kotlin** (`.kt`, `.kts`), with nested block comments
//!
//! A line holding both code and a comment counts as executable.
//!
//! ## Architecture
//!
//! The library follows a four-stage pipeline:
//!
//! 1. **source**: discover files to count (directory walking, glob filters)
//! 2. **data**: classify lines and produce per-file [`StepCountData`]
//! 3. **query**: sort records and sum them into [`AllFilesStepCountData`]
//! 4. **output**: format the result as a [`Report`](output::Report)
//!
//! ## Example
//!
//! ```rust
//! use stepcountlib::{count_paths, count_source, CountOptions, Language, Sorting};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // Count a source string
//! let counts = count_source("int x = 1; // one\n\n/* two */\n", &Language::C);
//! assert_eq!((counts.exec, counts.comment, counts.empty), (1, 1, 1));
//!
//! // Count a directory
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("Main.java"), "class Main {\n}\n").unwrap();
//! let result = count_paths(&[dir.path()], CountOptions::new().sorting(Sorting::by_total())).unwrap();
//! assert_eq!(result.to_comma_delimited(), "合計,2,2,0,0");
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

pub use data::{
    collect_files, count_file, count_files, count_paths, count_source, read_source, scan_line,
    CommentPatternMatch, CountOptions, Delimiters, Language, LineCategory, LineClassifier,
    Literal, ScanState, StepCountData, StepCounts,
};
pub use error::StepCountError;
pub use output::{Report, ReportRow};
pub use query::{sort_step_count_data, AllFilesStepCountData, SortTarget, SortType, Sorting};
pub use source::{discover_files, FilterConfig};

/// Result type for stepcountlib operations
pub type Result<T> = std::result::Result<T, StepCountError>;
