//! Aggregation of per-file step counts.
//!
//! [`AllFilesStepCountData`] takes the finished list of per-file records,
//! orders it once, and sums the counts of every record that was counted
//! successfully. Failed records stay in the list but never reach the sums.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::data::stats::{StepCountData, StepCounts};
use crate::error::StepCountError;
use crate::Result;

use super::options::{SortTarget, SortType, Sorting};

/// Label of the summary row.
pub const SUMMARY_LABEL: &str = "合計";

fn compare_by(a: &StepCountData, b: &StepCountData, target: SortTarget) -> Ordering {
    match target {
        SortTarget::FilePath => a.file_name().cmp(&b.file_name()),
        SortTarget::TotalStepCount => a.total().cmp(&b.total()),
        SortTarget::ExecStepCount => a.exec().cmp(&b.exec()),
        SortTarget::CommentStepCount => a.comment().cmp(&b.comment()),
        SortTarget::EmptyStepCount => a.empty().cmp(&b.empty()),
    }
}

/// Sort per-file records in place.
///
/// The sort is stable in both directions: records with equal keys keep their
/// original relative order.
pub fn sort_step_count_data(records: &mut [StepCountData], sorting: Sorting) {
    match sorting.sort_type {
        SortType::Ascending => records.sort_by(|a, b| compare_by(a, b, sorting.target)),
        SortType::Descending => records.sort_by(|a, b| compare_by(b, a, sorting.target)),
    }
}

/// Step counts across a set of files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllFilesStepCountData {
    sum: StepCounts,
    sorting: Sorting,
    records: Vec<StepCountData>,
}

impl AllFilesStepCountData {
    /// Sort `records` and sum the successful ones.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::path::PathBuf;
    /// use stepcountlib::{AllFilesStepCountData, Language, Sorting, StepCountData, StepCounts};
    ///
    /// let records = vec![
    ///     StepCountData::new(PathBuf::from("b.java"), Language::Java, StepCounts { exec: 3, comment: 1, empty: 0 }),
    ///     StepCountData::failed(PathBuf::from("c.vb"), "unsupported"),
    ///     StepCountData::new(PathBuf::from("a.cs"), Language::CSharp, StepCounts { exec: 1, comment: 0, empty: 2 }),
    /// ];
    /// let all = AllFilesStepCountData::new(records, Sorting::by_path());
    ///
    /// assert_eq!(all.records()[0].file_name(), "a.cs");
    /// assert_eq!(all.to_comma_delimited(), "合計,7,4,1,2");
    /// ```
    pub fn new(mut records: Vec<StepCountData>, sorting: Sorting) -> Self {
        sort_step_count_data(&mut records, sorting);

        let sum = records
            .iter()
            .filter(|record| record.success)
            .fold(StepCounts::new(), |acc, record| acc + record.counts);

        Self {
            sum,
            sorting,
            records,
        }
    }

    /// Like [`new`](Self::new), but for an optional record list.
    ///
    /// A missing list is rejected with [`StepCountError::InvalidArgument`].
    pub fn from_option(records: Option<Vec<StepCountData>>, sorting: Sorting) -> Result<Self> {
        let records = records.ok_or_else(|| {
            StepCountError::InvalidArgument("step count record list is missing".to_string())
        })?;
        Ok(Self::new(records, sorting))
    }

    /// Sums over successful records
    pub fn sum(&self) -> StepCounts {
        self.sum
    }

    /// Per-file records in sorted order (failed records included)
    pub fn records(&self) -> &[StepCountData] {
        &self.records
    }

    /// Ordering applied to the records
    pub fn sorting(&self) -> Sorting {
        self.sorting
    }

    /// Number of records that failed to count
    pub fn failed_count(&self) -> usize {
        self.records.iter().filter(|record| !record.success).count()
    }

    /// Render the summary row: `合計,<total>,<exec>,<comment>,<empty>`.
    pub fn to_comma_delimited(&self) -> String {
        format!(
            "{},{},{},{},{}",
            SUMMARY_LABEL,
            self.sum.total(),
            self.sum.exec,
            self.sum.comment,
            self.sum.empty
        )
    }
}
