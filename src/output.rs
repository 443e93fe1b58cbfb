//! Output formatting for comparison results.
//!
//! Equal documents print a single line. Unequal documents print both path
//! listings so the reader can spot the leaves that differ, followed by a
//! summary of how many paths exist on one side only.
//!
//! # Examples
//!
//! ```
//! use leafcmp::{compare_documents, format_result, OutputFormat, OutputOptions};
//!
//! let result = compare_documents(br#"{"a": "1"}"#, br#"{"a": "1"}"#).unwrap();
//! let output = format_result(&result, &OutputFormat::Plain, &OutputOptions::default()).unwrap();
//! assert_eq!(output, "both are same");
//! ```

use crate::compare::ComparisonResult;
use crate::error::OutputError;
use colored::*;
use serde::Serialize;
use std::collections::HashSet;
use std::str::FromStr;

pub const SAME_MESSAGE: &str = "both are same";
pub const NOT_SAME_MESSAGE: &str = "given contents are not same";

const EMPTY_LISTING: &str = "(no leaf paths)";

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored terminal output with ANSI escape codes
    Terminal,
    /// JSON representation of the result
    Json,
    /// Plain text, no colors (suitable for piping)
    Plain,
}

impl FromStr for OutputFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            "plain" => Ok(OutputFormat::Plain),
            _ => Err(OutputError::UnknownFormat {
                format: s.to_string(),
            }),
        }
    }
}

/// Options for controlling output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    /// Print both path listings even when the documents are equal
    pub show_paths: bool,
}

/// Which side of the comparison a listing belongs to.
#[derive(Clone, Copy)]
enum Side {
    First,
    Second,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a ComparisonResult,
    only_in_first: Vec<&'a str>,
    only_in_second: Vec<&'a str>,
}

/// Formats a comparison result according to the specified format and options.
///
/// # Errors
///
/// Only the JSON format can fail, if serialization fails.
pub fn format_result(
    result: &ComparisonResult,
    format: &OutputFormat,
    options: &OutputOptions,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Terminal => Ok(format_terminal(result, options)),
        OutputFormat::Json => format_json(result),
        OutputFormat::Plain => Ok(format_plain(result, options)),
    }
}

/// Formats a result for terminal output with colors.
///
/// Paths present on one side only are highlighted: red in the first
/// listing, green in the second.
fn format_terminal(result: &ComparisonResult, options: &OutputOptions) -> String {
    let heading = if result.is_equal {
        SAME_MESSAGE.bright_green().to_string()
    } else {
        NOT_SAME_MESSAGE.bright_red().bold().to_string()
    };

    if result.is_equal && !options.show_paths {
        return heading;
    }

    let only_first: HashSet<&str> = result.only_in_first().into_iter().collect();
    let only_second: HashSet<&str> = result.only_in_second().into_iter().collect();

    let first = colored_listing(&result.first_paths, &only_first, Side::First);
    let second = colored_listing(&result.second_paths, &only_second, Side::Second);

    let mut output = format!(
        "{}\n\n {}\n\n{}\n\n {}\n\n{}",
        heading,
        "-- first:".bold(),
        first,
        "-- second:".bold(),
        second
    );

    if !result.is_equal {
        output.push_str("\n\n");
        output.push_str(&format_summary(result).dimmed().to_string());
    }

    output
}

/// Formats a result as plain text, no colors.
fn format_plain(result: &ComparisonResult, options: &OutputOptions) -> String {
    let heading = if result.is_equal {
        SAME_MESSAGE
    } else {
        NOT_SAME_MESSAGE
    };

    if result.is_equal && !options.show_paths {
        return heading.to_string();
    }

    let mut output = format!(
        "{}\n\n -- first:\n\n{}\n\n -- second:\n\n{}",
        heading,
        listing_or_placeholder(&result.first_paths),
        listing_or_placeholder(&result.second_paths)
    );

    if !result.is_equal {
        output.push_str("\n\n");
        output.push_str(&format_summary(result));
    }

    output
}

fn format_json(result: &ComparisonResult) -> Result<String, OutputError> {
    let report = JsonReport {
        result,
        only_in_first: result.only_in_first(),
        only_in_second: result.only_in_second(),
    };

    serde_json::to_string_pretty(&report)
        .map_err(|e| OutputError::JsonSerializationError { source: e })
}

fn colored_listing(listing: &str, one_sided: &HashSet<&str>, side: Side) -> String {
    if listing.is_empty() {
        return EMPTY_LISTING.dimmed().to_string();
    }

    listing
        .split('\n')
        .map(|path| {
            if !one_sided.contains(path) {
                return path.to_string();
            }
            match side {
                Side::First => path.red().to_string(),
                Side::Second => path.green().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn listing_or_placeholder(listing: &str) -> &str {
    if listing.is_empty() {
        EMPTY_LISTING
    } else {
        listing
    }
}

/// Formats the one-sided path counts, e.g.
/// `Summary: 2 paths each, 1 only in first, 1 only in second`.
fn format_summary(result: &ComparisonResult) -> String {
    let first_count = result.first_path_count();
    let second_count = result.second_path_count();

    let sizes = if first_count == second_count {
        format!("{} each", path_count(first_count))
    } else {
        format!("{} vs {}", path_count(first_count), path_count(second_count))
    };

    format!(
        "Summary: {}, {} only in first, {} only in second",
        sizes,
        result.only_in_first().len(),
        result.only_in_second().len()
    )
}

fn path_count(count: usize) -> String {
    if count == 1 {
        "1 path".to_string()
    } else {
        format!("{} paths", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare_paths;

    fn result(first: &[&str], second: &[&str]) -> ComparisonResult {
        let first: Vec<String> = first.iter().map(|p| p.to_string()).collect();
        let second: Vec<String> = second.iter().map(|p| p.to_string()).collect();
        compare_paths(&first, &second)
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "PLAIN".parse::<OutputFormat>().unwrap(),
            OutputFormat::Plain
        );
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown output format: xml");
    }

    #[test]
    fn test_format_plain_equal() {
        let output = format_plain(&result(&["a"], &["a"]), &OutputOptions::default());
        assert_eq!(output, "both are same");
    }

    #[test]
    fn test_format_plain_equal_with_paths() {
        let options = OutputOptions { show_paths: true };
        let output = format_plain(&result(&["a"], &["a"]), &options);
        assert_eq!(output, "both are same\n\n -- first:\n\na\n\n -- second:\n\na");
    }

    #[test]
    fn test_format_plain_not_equal() {
        let output = format_plain(&result(&["a", "b"], &["a", "c"]), &OutputOptions::default());
        assert!(output.starts_with("given contents are not same"));
        assert!(output.contains(" -- first:\n\na\nb"));
        assert!(output.contains(" -- second:\n\na\nc"));
        assert!(output.ends_with("Summary: 2 paths each, 1 only in first, 1 only in second"));
    }

    #[test]
    fn test_format_plain_empty_side() {
        let output = format_plain(&result(&[], &["a"]), &OutputOptions::default());
        assert!(output.contains(" -- first:\n\n(no leaf paths)"));
        assert!(output.contains("Summary: 0 paths vs 1 path"));
    }

    #[test]
    fn test_format_json() {
        let output = format_json(&result(&["a", "b"], &["a", "c"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["is_equal"], serde_json::json!(false));
        assert_eq!(value["first_paths"], serde_json::json!("a\nb"));
        assert_eq!(value["only_in_first"], serde_json::json!(["b"]));
        assert_eq!(value["only_in_second"], serde_json::json!(["c"]));
    }

    #[test]
    fn test_format_terminal_contains_listings() {
        let output = format_terminal(&result(&["a"], &["b"]), &OutputOptions::default());
        assert!(output.contains(NOT_SAME_MESSAGE));
        assert!(output.contains("-- first:"));
        assert!(output.contains('a'));
        assert!(output.contains('b'));
    }
}
