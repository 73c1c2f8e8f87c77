//! Report-ready data structures for step count output.
//!
//! This module provides `Report`, a presentation-ready structure built from
//! [`AllFilesStepCountData`]: one header row, one row per file in sorted
//! order, and a summary footer. It only formats values into strings; sorting
//! and summing have already happened.

use serde::{Deserialize, Serialize};

use crate::data::stats::{csv_field, StepCountData};
use crate::query::aggregate::{AllFilesStepCountData, SUMMARY_LABEL};

/// Column headers: file name, total, executable, comment, blank.
pub const HEADERS: [&str; 5] = ["ファイル名", "総行数", "実行行数", "コメント行数", "空行数"];

/// Placeholder for the counts of a file that failed to count.
pub const FAILED_CELL: &str = "-";

/// A single row in the report (data row or footer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Row label (file name or the summary label)
    pub label: String,
    /// Total, executable, comment and blank counts, ready for display
    pub values: Vec<String>,
}

impl ReportRow {
    fn from_record(record: &StepCountData) -> Self {
        let values = if record.success {
            vec![
                record.total().to_string(),
                record.exec().to_string(),
                record.comment().to_string(),
                record.empty().to_string(),
            ]
        } else {
            vec![FAILED_CELL.to_string(); 4]
        };

        ReportRow {
            label: record.file_name(),
            values,
        }
    }

    /// Comma-delimited rendering of the row. A label holding a comma, quote
    /// or line break is quoted.
    pub fn to_comma_delimited(&self) -> String {
        std::iter::once(csv_field(&self.label))
            .chain(self.values.iter().map(|value| csv_field(value)))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Table-ready step count data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Column headers
    pub headers: Vec<String>,
    /// One row per file
    pub rows: Vec<ReportRow>,
    /// Summary row over successfully counted files
    pub footer: ReportRow,
}

impl Report {
    /// Build a report from aggregated step counts.
    pub fn from_all_files(all: &AllFilesStepCountData) -> Self {
        let sum = all.sum();

        Report {
            headers: HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: all.records().iter().map(ReportRow::from_record).collect(),
            footer: ReportRow {
                label: SUMMARY_LABEL.to_string(),
                values: vec![
                    sum.total().to_string(),
                    sum.exec.to_string(),
                    sum.comment.to_string(),
                    sum.empty.to_string(),
                ],
            },
        }
    }

    /// Render as comma-delimited text: header, file rows, summary row.
    pub fn to_csv(&self) -> String {
        let mut out = self.headers.join(",");
        out.push('\n');
        for row in self.rows.iter().chain(std::iter::once(&self.footer)) {
            out.push_str(&row.to_comma_delimited());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::pattern::Language;
    use crate::data::stats::StepCounts;
    use crate::query::Sorting;
    use std::path::PathBuf;

    fn all_files() -> AllFilesStepCountData {
        AllFilesStepCountData::new(
            vec![
                StepCountData::new(
                    PathBuf::from("src/b.java"),
                    Language::Java,
                    StepCounts {
                        exec: 5,
                        comment: 2,
                        empty: 1,
                    },
                ),
                StepCountData::failed(PathBuf::from("src/c.vb"), "unsupported"),
                StepCountData::new(
                    PathBuf::from("src/a.cs"),
                    Language::CSharp,
                    StepCounts {
                        exec: 1,
                        comment: 0,
                        empty: 0,
                    },
                ),
            ],
            Sorting::by_path(),
        )
    }

    #[test]
    fn rows_follow_record_order() {
        let report = Report::from_all_files(&all_files());
        let labels: Vec<_> = report.rows.iter().map(|r| r.label.as_str()).collect();

        assert_eq!(labels, vec!["a.cs", "b.java", "c.vb"]);
    }

    #[test]
    fn rows_match_record_rendering() {
        let all = all_files();
        let report = Report::from_all_files(&all);

        for (row, record) in report.rows.iter().zip(all.records()) {
            assert_eq!(row.to_comma_delimited(), record.to_comma_delimited());
        }
        assert_eq!(report.footer.to_comma_delimited(), all.to_comma_delimited());
    }

    #[test]
    fn csv_has_header_rows_and_summary() {
        let report = Report::from_all_files(&all_files());

        assert_eq!(
            report.to_csv(),
            "ファイル名,総行数,実行行数,コメント行数,空行数\n\
             a.cs,1,1,0,0\n\
             b.java,8,5,2,1\n\
             c.vb,-,-,-,-\n\
             合計,9,6,2,1\n"
        );
    }

    #[test]
    fn csv_keeps_columns_for_names_with_commas() {
        let all = AllFilesStepCountData::new(
            vec![StepCountData::new(
                PathBuf::from("gen/a,b.go"),
                Language::Go,
                StepCounts {
                    exec: 2,
                    comment: 1,
                    empty: 0,
                },
            )],
            Sorting::by_path(),
        );
        let report = Report::from_all_files(&all);

        assert_eq!(report.rows[0].label, "a,b.go");
        assert_eq!(report.rows[0].to_comma_delimited(), "\"a,b.go\",3,2,1,0");
        assert_eq!(report.rows[0].to_comma_delimited(), all.records()[0].to_comma_delimited());
    }

    #[test]
    fn report_serializes_to_json() {
        let report = Report::from_all_files(&all_files());
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["headers"][0], "ファイル名");
        assert_eq!(value["rows"].as_array().unwrap().len(), 3);
        assert_eq!(value["footer"]["label"], "合計");
    }
}
