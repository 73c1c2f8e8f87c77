//! High-level step counting API.
//!
//! This module provides the entry points for counting a source string, a
//! single file, or a set of files and directories.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::data::classifier::LineClassifier;
use crate::data::pattern::{CommentPatternMatch, Language};
use crate::data::stats::{StepCountData, StepCounts};
use crate::error::StepCountError;
use crate::query::{AllFilesStepCountData, Sorting};
use crate::source::{discover_files, FilterConfig};
use crate::Result;

const UTF8_BOM: &str = "\u{feff}";

/// Options for counting a file set.
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    /// File filter applied while walking directories
    pub file_filter: FilterConfig,
    /// Ordering of the per-file records
    pub sorting: Sorting,
}

impl CountOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.file_filter = filter;
        self
    }

    /// Set the ordering of per-file records.
    pub fn sorting(mut self, sorting: Sorting) -> Self {
        self.sorting = sorting;
        self
    }
}

/// Count the lines of one source text.
///
/// Each call starts from a fresh scan state.
///
/// # Example
///
/// ```rust
/// use stepcountlib::{count_source, Language};
///
/// let source = "// greeting\nclass Hello {\n\n    /* body */\n}\n";
/// let counts = count_source(source, &Language::Java);
///
/// assert_eq!(counts.exec, 2);
/// assert_eq!(counts.comment, 2);
/// assert_eq!(counts.empty, 1);
/// assert_eq!(counts.total(), 5);
/// ```
pub fn count_source<P>(source: &str, pattern: &P) -> StepCounts
where
    P: CommentPatternMatch + ?Sized,
{
    let source = source.strip_prefix(UTF8_BOM).unwrap_or(source);
    let mut classifier = LineClassifier::new(pattern);
    source.lines().map(|line| classifier.classify(line)).collect()
}

/// Read a source file as UTF-8.
pub fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| StepCountError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    String::from_utf8(bytes).map_err(|_| StepCountError::InvalidEncoding(path.to_path_buf()))
}

fn try_count_file(path: &Path) -> Result<StepCountData> {
    let language = Language::from_path(path)?;
    let source = read_source(path)?;
    let counts = count_source(&source, &language);
    Ok(StepCountData::new(path.to_path_buf(), language, counts))
}

/// Count the lines of a single file.
///
/// Never fails: a file that cannot be read or whose extension is not
/// supported yields a failed record with zero counts.
///
/// # Example
///
/// ```rust,ignore
/// use stepcountlib::count_file;
///
/// let data = count_file("src/Main.java");
/// if data.success {
///     println!("{}", data.to_comma_delimited());
/// }
/// ```
pub fn count_file(path: impl AsRef<Path>) -> StepCountData {
    let path = path.as_ref();
    match try_count_file(path) {
        Ok(data) => {
            debug!(
                "{}: {} total, {} exec, {} comment, {} empty ({})",
                path.display(),
                data.total(),
                data.exec(),
                data.comment(),
                data.empty(),
                data.language.map(|l| l.tag()).unwrap_or_default()
            );
            data
        }
        Err(e) => {
            warn!("skipping {}: {}", path.display(), e);
            StepCountData::failed(path.to_path_buf(), e.to_string())
        }
    }
}

/// Count a list of files, keeping input order.
#[cfg(not(feature = "parallel"))]
pub fn count_files(files: &[PathBuf]) -> Vec<StepCountData> {
    files.iter().map(count_file).collect()
}

/// Count a list of files in parallel, keeping input order.
#[cfg(feature = "parallel")]
pub fn count_files(files: &[PathBuf]) -> Vec<StepCountData> {
    use rayon::prelude::*;

    files.par_iter().map(count_file).collect()
}

/// Collect the files to count from a mix of file and directory paths.
///
/// Directories are walked and filtered; files named explicitly are always
/// kept, whatever their extension. Paths naming the same file are dropped
/// after the first, which is kept as given.
pub fn collect_files(paths: &[impl AsRef<Path>], filter: &FilterConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StepCountError::PathNotFound(path.to_path_buf()));
        }
        if path.is_file() {
            files.push(path.to_path_buf());
        } else {
            files.extend(discover_files(path, filter)?);
        }
    }

    // the same file may be reached by differently spelled paths
    let mut seen = HashSet::new();
    files.retain(|file| {
        let key = fs::canonicalize(file).unwrap_or_else(|_| file.clone());
        seen.insert(key)
    });

    Ok(files)
}

/// Count every file under the given paths and aggregate the results.
///
/// # Example
///
/// ```rust,ignore
/// use stepcountlib::{count_paths, CountOptions, Sorting};
///
/// let result = count_paths(&["src"], CountOptions::new().sorting(Sorting::by_total()))?;
/// println!("{}", result.to_comma_delimited());
/// ```
pub fn count_paths(
    paths: &[impl AsRef<Path>],
    options: CountOptions,
) -> Result<AllFilesStepCountData> {
    let files = collect_files(paths, &options.file_filter)?;
    debug!("counting {} files", files.len());

    let records = count_files(&files);
    Ok(AllFilesStepCountData::new(records, options.sorting))
}
