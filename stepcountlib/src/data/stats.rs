//! Core data structures for step counts

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::ops::{Add, AddAssign};
use std::path::{Path, PathBuf};

use crate::data::classifier::LineCategory;
use crate::data::pattern::Language;

/// Line counts by category.
///
/// The total is always derived, so `total == exec + comment + empty` holds
/// for every value of this type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepCounts {
    /// Executable lines (code, including lines that also hold a comment)
    pub exec: u64,
    /// Comment-only lines
    pub comment: u64,
    /// Blank lines
    pub empty: u64,
}

impl StepCounts {
    /// Create a new StepCounts with all zeros
    pub fn new() -> Self {
        Self::default()
    }

    /// Total lines
    pub fn total(&self) -> u64 {
        self.exec + self.comment + self.empty
    }

    /// Tally one classified line.
    pub fn record(&mut self, category: LineCategory) {
        match category {
            LineCategory::Executable => self.exec += 1,
            LineCategory::Comment => self.comment += 1,
            LineCategory::Blank => self.empty += 1,
        }
    }
}

impl FromIterator<LineCategory> for StepCounts {
    fn from_iter<I: IntoIterator<Item = LineCategory>>(iter: I) -> Self {
        let mut counts = Self::new();
        for category in iter {
            counts.record(category);
        }
        counts
    }
}

impl Add for StepCounts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            exec: self.exec + other.exec,
            comment: self.comment + other.comment,
            empty: self.empty + other.empty,
        }
    }
}

impl AddAssign for StepCounts {
    fn add_assign(&mut self, other: Self) {
        self.exec += other.exec;
        self.comment += other.comment;
        self.empty += other.empty;
    }
}

/// Step counts for a single file.
///
/// A failed record (unreadable file, unsupported extension) keeps the path
/// and the reason but carries zero counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepCountData {
    /// Path to the file
    pub path: PathBuf,
    /// Language the file was classified as
    pub language: Option<Language>,
    /// Line counts
    pub counts: StepCounts,
    /// Whether the file was read and classified
    pub success: bool,
    /// Why counting failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StepCountData {
    /// Create a successful record.
    pub fn new(path: PathBuf, language: Language, counts: StepCounts) -> Self {
        Self {
            path,
            language: Some(language),
            counts,
            success: true,
            error: None,
        }
    }

    /// Create a failed record with zero counts.
    pub fn failed(path: PathBuf, reason: impl Into<String>) -> Self {
        Self {
            path,
            language: None,
            counts: StepCounts::new(),
            success: false,
            error: Some(reason.into()),
        }
    }

    /// File name used in reports (last path component).
    pub fn file_name(&self) -> String {
        file_name_of(&self.path)
    }

    pub fn total(&self) -> u64 {
        self.counts.total()
    }

    pub fn exec(&self) -> u64 {
        self.counts.exec
    }

    pub fn comment(&self) -> u64 {
        self.counts.comment
    }

    pub fn empty(&self) -> u64 {
        self.counts.empty
    }

    /// Render as `<fileName>,<total>,<exec>,<comment>,<empty>`.
    ///
    /// Failed records render their counts as `-`. A file name holding a
    /// comma, quote or line break is quoted.
    pub fn to_comma_delimited(&self) -> String {
        if self.success {
            format!(
                "{},{},{},{},{}",
                csv_field(&self.file_name()),
                self.total(),
                self.exec(),
                self.comment(),
                self.empty()
            )
        } else {
            format!("{},-,-,-,-", csv_field(&self.file_name()))
        }
    }
}

impl fmt::Display for StepCountData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_comma_delimited())
    }
}

/// Quote a comma-delimited field when it holds a delimiter, quote or line
/// break; embedded quotes are doubled.
pub(crate) fn csv_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

pub(crate) fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
