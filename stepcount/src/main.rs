//! # stepcount
//!
//! A command-line step counter: for each source file, count total,
//! executable, comment and blank lines.
//!
//! ## Overview
//!
//! stepcount is built on top of stepcountlib. Comment markers are recognised
//! per language (Java, C#, C/C++, JavaScript/TypeScript, Go, Kotlin), and
//! comment tokens inside string literals are ignored. A line holding both
//! code and a comment counts as executable.
//!
//! ## Usage
//!
//! ```bash
//! # Count every supported file under the current directory
//! stepcount
//!
//! # Largest files first, as an aligned table
//! stepcount src --sort-by total --order desc --format table
//!
//! # Filter files with glob patterns
//! stepcount . --include "**/src/**" --exclude "**/generated/**"
//!
//! # Write the CSV report to a file
//! stepcount . --out steps.csv
//! ```

mod render;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{debug, LevelFilter};
use stepcountlib::output::Report;
use stepcountlib::{count_paths, CountOptions, FilterConfig, SortTarget, SortType, Sorting};

use render::OutputFormat;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("stepcount")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Step counter: executable, comment and blank lines per source file")
        .arg(
            Arg::new("paths")
                .help("Files or directories to count (defaults to current directory)")
                .action(ArgAction::Append)
                .default_value("."),
        )
        .arg(
            Arg::new("sort-by")
                .short('s')
                .long("sort-by")
                .value_parser(["path", "total", "exec", "comment", "empty"])
                .default_value("path")
                .help("Column to sort files by"),
        )
        .arg(
            Arg::new("order")
                .long("order")
                .value_parser(["asc", "desc"])
                .default_value("asc")
                .help("Sort direction"),
        )
        .arg(
            Arg::new("include")
                .short('i')
                .long("include")
                .action(ArgAction::Append)
                .help("Include files matching glob pattern"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Exclude files matching glob pattern"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_parser(["csv", "table", "json"])
                .default_value("csv")
                .help("Output format"),
        )
        .arg(
            Arg::new("out")
                .short('o')
                .long("out")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Write the report to a file instead of stdout"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log each counted file to stderr"),
        )
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> anyhow::Result<FilterConfig> {
    let mut filter = FilterConfig::new();

    if let Some(includes) = matches.get_many::<String>("include") {
        for pattern in includes {
            filter = filter.include(pattern)?;
        }
    }

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for pattern in excludes {
            filter = filter.exclude(pattern)?;
        }
    }

    Ok(filter)
}

/// Build sorting from matches
fn build_sorting(matches: &ArgMatches) -> anyhow::Result<Sorting> {
    let target: SortTarget = matches
        .get_one::<String>("sort-by")
        .map(|s| s.parse())
        .transpose()
        .map_err(|e: String| anyhow!(e))?
        .unwrap_or_default();
    let sort_type: SortType = matches
        .get_one::<String>("order")
        .map(|s| s.parse())
        .transpose()
        .map_err(|e: String| anyhow!(e))?
        .unwrap_or_default();

    Ok(Sorting::new(target, sort_type))
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let paths: Vec<PathBuf> = matches
        .get_many::<String>("paths")
        .map(|v| v.map(PathBuf::from).collect())
        .unwrap_or_default();
    let format = matches
        .get_one::<String>("format")
        .and_then(|s| OutputFormat::from_name(s))
        .unwrap_or(OutputFormat::Csv);

    let options = CountOptions::new()
        .filter(build_filter(matches)?)
        .sorting(build_sorting(matches)?);

    let result = count_paths(&paths, options)?;
    debug!(
        "{} files counted, {} failed",
        result.records().len(),
        result.failed_count()
    );

    let report = Report::from_all_files(&result);
    let rendered = render::render(&report, format)?;

    match matches.get_one::<PathBuf>("out") {
        Some(out) => fs::write(out, rendered)
            .with_context(|| format!("failed to write report to '{}'", out.display()))?,
        None => print!("{}", rendered),
    }

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        build_command().debug_assert();
    }

    #[test]
    fn test_default_sorting() {
        let matches = build_command().get_matches_from(["stepcount"]);
        assert_eq!(build_sorting(&matches).unwrap(), Sorting::by_path());
    }

    #[test]
    fn test_sorting_from_flags() {
        let matches =
            build_command().get_matches_from(["stepcount", "-s", "total", "--order", "desc"]);
        assert_eq!(build_sorting(&matches).unwrap(), Sorting::by_total());
    }

    #[test]
    fn test_build_filter_rejects_bad_glob() {
        let matches = build_command().get_matches_from(["stepcount", "-i", "[bad"]);
        assert!(build_filter(&matches).is_err());
    }

    #[test]
    fn test_multiple_paths() {
        let matches = build_command().get_matches_from(["stepcount", "src", "lib"]);
        let paths: Vec<&String> = matches.get_many::<String>("paths").unwrap().collect();
        assert_eq!(paths, vec!["src", "lib"]);
    }
}
