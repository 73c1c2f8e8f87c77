//! Rendering of step count reports for the terminal and for files.

use console::{measure_text_width, pad_str, Alignment, Style};
use stepcountlib::output::{Report, ReportRow};

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "csv" => Some(OutputFormat::Csv),
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Render a report in the given format.
pub fn render(report: &Report, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Csv => Ok(report.to_csv()),
        OutputFormat::Table => Ok(render_table(report)),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(report)?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn column_widths(report: &Report) -> Vec<usize> {
    let mut widths: Vec<usize> = report.headers.iter().map(|h| measure_text_width(h)).collect();

    for row in report.rows.iter().chain(std::iter::once(&report.footer)) {
        let cells = std::iter::once(&row.label).chain(row.values.iter());
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(measure_text_width(cell));
        }
    }

    widths
}

fn format_row(row: &ReportRow, widths: &[usize]) -> String {
    let mut line = pad_str(&row.label, widths[0], Alignment::Left, None).into_owned();
    for (value, width) in row.values.iter().zip(&widths[1..]) {
        line.push_str("  ");
        line.push_str(&pad_str(value, *width, Alignment::Right, None));
    }
    line.trim_end().to_string()
}

/// Render a report as an aligned text table.
///
/// File names are left-aligned, counts right-aligned. Widths are measured in
/// terminal columns so wide characters in the headers line up.
pub fn render_table(report: &Report) -> String {
    let widths = column_widths(report);
    let header_style = Style::new().bold();

    let mut header = pad_str(&report.headers[0], widths[0], Alignment::Left, None).into_owned();
    for (name, width) in report.headers[1..].iter().zip(&widths[1..]) {
        header.push_str("  ");
        header.push_str(&pad_str(name, *width, Alignment::Right, None));
    }

    let separator = "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1));

    let mut out = String::new();
    out.push_str(&header_style.apply_to(header.trim_end()).to_string());
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');
    for row in &report.rows {
        out.push_str(&format_row(row, &widths));
        out.push('\n');
    }
    out.push_str(&separator);
    out.push('\n');
    out.push_str(&format_row(&report.footer, &widths));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use stepcountlib::{AllFilesStepCountData, Language, Sorting, StepCountData, StepCounts};

    fn report() -> Report {
        let all = AllFilesStepCountData::new(
            vec![
                StepCountData::new(
                    PathBuf::from("src/Main.java"),
                    Language::Java,
                    StepCounts {
                        exec: 120,
                        comment: 30,
                        empty: 12,
                    },
                ),
                StepCountData::failed(PathBuf::from("Module1.vb"), "unsupported"),
            ],
            Sorting::by_path(),
        );
        Report::from_all_files(&all)
    }

    #[test]
    fn test_output_format_from_name() {
        assert_eq!(OutputFormat::from_name("csv"), Some(OutputFormat::Csv));
        assert_eq!(OutputFormat::from_name("table"), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::from_name("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name("xml"), None);
    }

    #[test]
    fn test_render_csv_matches_report() {
        let report = report();
        assert_eq!(render(&report, OutputFormat::Csv).unwrap(), report.to_csv());
    }

    #[test]
    fn test_render_table_aligns_rows() {
        console::set_colors_enabled(false);
        let table = render_table(&report());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("ファイル名"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with("Main.java"));
        assert!(lines[2].ends_with("12"));
        assert!(lines[3].starts_with("Module1.vb"));
        assert!(lines[3].ends_with('-'));
        assert!(lines[5].starts_with("合計"));
        assert!(lines[5].contains("162"));
        assert_eq!(measure_text_width(lines[2]), measure_text_width(lines[5]));
    }

    #[test]
    fn test_render_json() {
        let json = render(&report(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["rows"][0]["label"], "Main.java");
        assert_eq!(parsed["rows"][1]["values"][0], "-");
        assert_eq!(parsed["footer"]["values"][0], "162");
    }
}
