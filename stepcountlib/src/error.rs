//! Error types for stepcountlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during step counting
#[derive(Error, Debug)]
pub enum StepCountError {
    /// No comment pattern is registered for the extension
    #[error("unsupported file extension: '{0}'")]
    UnsupportedExtension(String),

    /// A required argument was missing or malformed
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File content is not valid UTF-8
    #[error("file is not valid UTF-8: {0}")]
    InvalidEncoding(PathBuf),

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),
}
