//! Source discovery: find files to count.
//!
//! This module handles the first stage of the pipeline - discovering what
//! files to count. Directories are walked for files with a supported
//! extension, and include/exclude glob patterns narrow the selection.
//!
//! ## Example
//!
//! ```rust,ignore
//! use stepcountlib::source::{discover_files, FilterConfig};
//!
//! let filter = FilterConfig::new().exclude("**/generated/**")?;
//! let files = discover_files("src", &filter)?;
//! ```

pub mod filter;

pub use filter::{discover_files, FilterConfig};
