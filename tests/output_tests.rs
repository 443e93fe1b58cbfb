use leafcmp::output::{format_result, OutputFormat, OutputOptions};
use leafcmp::{compare_documents, compare_paths, OutputError};

fn paths(items: &[&str]) -> Vec<String> {
    items.iter().map(|p| p.to_string()).collect()
}

#[test]
fn test_format_plain_equal() {
    let result = compare_documents(br#"{"a": "1"}"#, br#"{"a": "1"}"#).unwrap();
    let output = format_result(&result, &OutputFormat::Plain, &OutputOptions::default()).unwrap();
    assert_eq!(output, "both are same");
}

#[test]
fn test_format_plain_not_equal() {
    let result = compare_documents(br#"{"x": "1"}"#, br#"{"x": "2"}"#).unwrap();
    let output = format_result(&result, &OutputFormat::Plain, &OutputOptions::default()).unwrap();
    assert_eq!(
        output,
        "given contents are not same\n\n -- first:\n\n(x)#STRING#\"1\"\n\n -- second:\n\n(x)#STRING#\"2\"\n\nSummary: 1 path each, 1 only in first, 1 only in second"
    );
}

#[test]
fn test_format_json_roundtrips_verdict() {
    let result = compare_paths(&paths(&["a", "b"]), &paths(&["b", "a"]));
    let output = format_result(&result, &OutputFormat::Json, &OutputOptions::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["is_equal"], serde_json::json!(true));
    assert_eq!(value["second_paths"], serde_json::json!("b\na"));
    assert_eq!(value["only_in_first"], serde_json::json!([]));
}

#[test]
fn test_format_terminal_equal_without_paths() {
    let result = compare_paths(&paths(&["a"]), &paths(&["a"]));
    let output =
        format_result(&result, &OutputFormat::Terminal, &OutputOptions::default()).unwrap();
    assert!(output.contains("both are same"));
    assert!(!output.contains("-- first:"));
}

#[test]
fn test_format_terminal_show_paths() {
    let result = compare_paths(&paths(&["(k)#BOOL#true"]), &paths(&["(k)#BOOL#true"]));
    let options = OutputOptions { show_paths: true };
    let output = format_result(&result, &OutputFormat::Terminal, &options).unwrap();
    assert!(output.contains("-- first:"));
    assert!(output.contains("(k)#BOOL#true"));
}

#[test]
fn test_unknown_output_format() {
    let err = "yaml".parse::<OutputFormat>().unwrap_err();
    assert!(matches!(err, OutputError::UnknownFormat { .. }));
}
