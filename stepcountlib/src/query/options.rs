//! Sorting options for per-file step counts.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Field to sort per-file records by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortTarget {
    /// File name (last path component, lexicographical)
    #[default]
    FilePath,
    /// Total line count
    TotalStepCount,
    /// Executable line count
    ExecStepCount,
    /// Comment line count
    CommentStepCount,
    /// Blank line count
    EmptyStepCount,
}

impl FromStr for SortTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "path" | "name" | "file" | "filepath" => Ok(SortTarget::FilePath),
            "total" => Ok(SortTarget::TotalStepCount),
            "exec" | "code" => Ok(SortTarget::ExecStepCount),
            "comment" | "comments" => Ok(SortTarget::CommentStepCount),
            "empty" | "blank" | "blanks" => Ok(SortTarget::EmptyStepCount),
            _ => Err(format!("Unknown sort target: {}", s)),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortType {
    /// Ascending (A-Z, smallest first)
    #[default]
    Ascending,
    /// Descending (Z-A, largest first)
    Descending,
}

impl FromStr for SortType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortType::Ascending),
            "desc" | "descending" => Ok(SortType::Descending),
            _ => Err(format!("Unknown sort order: {}", s)),
        }
    }
}

/// Sorting configuration for per-file records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sorting {
    /// Field to sort by
    pub target: SortTarget,
    /// Sort direction
    pub sort_type: SortType,
}

impl Sorting {
    pub fn new(target: SortTarget, sort_type: SortType) -> Self {
        Self { target, sort_type }
    }

    /// Sort by file name, ascending (default)
    pub fn by_path() -> Self {
        Self::default()
    }

    /// Sort by total line count, largest first
    pub fn by_total() -> Self {
        Self::new(SortTarget::TotalStepCount, SortType::Descending)
    }

    /// Sort by executable line count, largest first
    pub fn by_exec() -> Self {
        Self::new(SortTarget::ExecStepCount, SortType::Descending)
    }

    /// Set sort direction to ascending
    pub fn ascending(mut self) -> Self {
        self.sort_type = SortType::Ascending;
        self
    }

    /// Set sort direction to descending
    pub fn descending(mut self) -> Self {
        self.sort_type = SortType::Descending;
        self
    }
}
