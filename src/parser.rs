//! Document loading for JSON, YAML and TOML.
//!
//! This module turns raw bytes, files or stdin into the generic [`Node`] tree.
//! The format is taken from a [`FormatHint`]; with [`FormatHint::Auto`] the
//! loader tries JSON first, then YAML, then TOML, and keeps the first result
//! whose root is a mapping.
//!
//! # Examples
//!
//! ```no_run
//! use leafcmp::parser::parse_file;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let node = parse_file(Path::new("data.json"))?;
//! let node = parse_file(Path::new("config.yaml"))?;
//! # Ok(())
//! # }
//! ```

use crate::error::ParseError;
use crate::tree::Node;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Source name used in errors for documents read from stdin.
pub const STDIN_SOURCE: &str = "<stdin>";

/// Which syntax a document is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatHint {
    /// Detect from the file extension, or try each format in turn
    #[default]
    Auto,
    Json,
    Yaml,
    Toml,
}

impl FormatHint {
    /// Picks a hint from a file extension (`.json`, `.yaml`/`.yml`, `.toml`).
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|s| s.to_lowercase());

        match extension.as_deref() {
            Some("json") => FormatHint::Json,
            Some("yaml") | Some("yml") => FormatHint::Yaml,
            Some("toml") => FormatHint::Toml,
            _ => FormatHint::Auto,
        }
    }
}

/// Parses a file into a Node, choosing the format from its extension.
///
/// # Arguments
///
/// * `path` - Path to the document. `.json`, `.yaml`/`.yml` and `.toml`
///   select their parser; any other extension tries every format.
///
/// # Returns
///
/// The parsed tree. The root is not checked here, see [`ensure_mapping`].
///
/// # Errors
///
/// - The file does not exist (`ParseError::FileNotFound`)
/// - The file cannot be read (`ParseError::ReadError`)
/// - The content is not UTF-8 (`ParseError::Encoding`)
/// - The content is invalid for its format, or no format matches
pub fn parse_file(path: &Path) -> Result<Node, ParseError> {
    parse_file_as(path, FormatHint::from_path(path))
}

/// Parses a file with an explicit format hint.
///
/// # Arguments
///
/// * `path` - Path to the document
/// * `hint` - Syntax to parse with. `FormatHint::Auto` still falls back to
///   the file extension before trying every format.
///
/// # Errors
///
/// Same as [`parse_file`].
pub fn parse_file_as(path: &Path, hint: FormatHint) -> Result<Node, ParseError> {
    let source = path.to_string_lossy().to_string();

    if !path.exists() {
        return Err(ParseError::file_not_found(source));
    }

    let bytes = fs::read(path).map_err(|e| ParseError::read_error(source.clone(), e))?;

    let hint = match hint {
        FormatHint::Auto => FormatHint::from_path(path),
        explicit => explicit,
    };

    tracing::debug!(path = %source, ?hint, bytes = bytes.len(), "loaded document");
    parse_bytes(&bytes, hint, &source)
}

/// Reads all of stdin and parses it.
///
/// Errors name the source as [`STDIN_SOURCE`].
pub fn parse_stdin(hint: FormatHint) -> Result<Node, ParseError> {
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .map_err(|e| ParseError::read_error(STDIN_SOURCE, e))?;

    tracing::debug!(?hint, bytes = bytes.len(), "loaded document from stdin");
    parse_bytes(&bytes, hint, STDIN_SOURCE)
}

/// Decodes a byte buffer as UTF-8 and parses it.
///
/// # Arguments
///
/// * `bytes` - Raw document text
/// * `hint` - Syntax to parse with
/// * `source` - Name of the buffer, used only in error messages
///
/// # Errors
///
/// `ParseError::Encoding` for invalid UTF-8, otherwise whatever
/// [`parse_content`] reports.
///
/// # Examples
///
/// ```
/// use leafcmp::parser::{parse_bytes, FormatHint};
///
/// let node = parse_bytes(b"name: Alice", FormatHint::Yaml, "inline").unwrap();
/// assert!(node.is_object());
/// ```
pub fn parse_bytes(bytes: &[u8], hint: FormatHint, source: &str) -> Result<Node, ParseError> {
    let content = std::str::from_utf8(bytes).map_err(|e| ParseError::encoding(source, e))?;
    parse_content(content, hint, source)
}

/// Parses text in the hinted format.
///
/// # Arguments
///
/// * `content` - Document text
/// * `hint` - Syntax to parse with
/// * `source` - Name of the document, used only in error messages
///
/// # Returns
///
/// With an explicit hint, whatever that parser produces. With
/// `FormatHint::Auto`, JSON, YAML and TOML are tried in that order and the
/// first mapping wins. YAML reads most TOML text as one plain string, so a
/// non-mapping JSON or YAML result only stands when TOML fails too; the
/// caller's [`ensure_mapping`] then reports the real root type.
///
/// # Errors
///
/// The format's own error for an explicit hint, or
/// `ParseError::UnknownFormat` when no format accepts the text.
///
/// # Examples
///
/// ```
/// use leafcmp::parser::{parse_content, FormatHint};
///
/// let node = parse_content("name = \"Alice\"\nadmin = true", FormatHint::Auto, "inline").unwrap();
/// assert!(node.is_object());
/// ```
pub fn parse_content(content: &str, hint: FormatHint, source: &str) -> Result<Node, ParseError> {
    match hint {
        FormatHint::Json => parse_json(content).map_err(|e| ParseError::json_error(source, e)),
        FormatHint::Yaml => parse_yaml(content).map_err(|e| ParseError::yaml_error(source, e)),
        FormatHint::Toml => parse_toml(content).map_err(|e| ParseError::toml_error(source, e)),
        FormatHint::Auto => detect_format(content, source),
    }
}

fn detect_format(content: &str, source: &str) -> Result<Node, ParseError> {
    let mut non_mapping = None;

    if let Ok(node) = parse_json(content) {
        if node.is_object() {
            tracing::trace!(source, "detected json");
            return Ok(node);
        }
        non_mapping = Some(node);
    }

    if let Ok(node) = parse_yaml(content) {
        if node.is_object() {
            tracing::trace!(source, "detected yaml");
            return Ok(node);
        }
        non_mapping.get_or_insert(node);
    }

    if let Ok(node) = parse_toml(content) {
        tracing::trace!(source, "detected toml");
        return Ok(node);
    }

    non_mapping.ok_or_else(|| ParseError::unknown_format(source))
}

/// Rejects documents whose root is not a mapping.
///
/// # Errors
///
/// `ParseError::NotAMapping` naming `source` and the root's type.
pub fn ensure_mapping(node: Node, source: &str) -> Result<Node, ParseError> {
    if node.is_object() {
        Ok(node)
    } else {
        Err(ParseError::not_a_mapping(source, node.type_name()))
    }
}

/// Parses a JSON string into a Node.
///
/// # Examples
///
/// ```
/// use leafcmp::parser::parse_json;
///
/// let node = parse_json(r#"{"name": "Alice", "admin": true}"#).unwrap();
/// assert!(node.is_object());
/// ```
pub fn parse_json(content: &str) -> Result<Node, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    Ok(json_to_node(value))
}

/// Parses a YAML string into a Node.
///
/// # Examples
///
/// ```
/// use leafcmp::parser::parse_yaml;
///
/// let node = parse_yaml("name: Alice\nadmin: true").unwrap();
/// assert!(node.is_object());
/// ```
pub fn parse_yaml(content: &str) -> Result<Node, serde_yaml::Error> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    Ok(yaml_to_node(value))
}

/// Parses a TOML document into a Node. The root is always a table.
pub fn parse_toml(content: &str) -> Result<Node, toml::de::Error> {
    let table: toml::Table = toml::from_str(content)?;
    Ok(toml_to_node(toml::Value::Table(table)))
}

fn json_to_node(value: serde_json::Value) -> Node {
    match value {
        serde_json::Value::Null => Node::Null,
        serde_json::Value::Bool(b) => Node::Bool(b),
        serde_json::Value::Number(n) => Node::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Node::String(s),
        serde_json::Value::Array(arr) => Node::Array(arr.into_iter().map(json_to_node).collect()),
        serde_json::Value::Object(obj) => {
            let map: BTreeMap<String, Node> =
                obj.into_iter().map(|(k, v)| (k, json_to_node(v))).collect();
            Node::Object(map)
        }
    }
}

/// Converts a serde_yaml::Value to a Node.
///
/// Anchors and tags are already resolved by serde_yaml; tags are dropped and
/// the tagged value kept. Non-string keys are stringified.
fn yaml_to_node(value: serde_yaml::Value) -> Node {
    match value {
        serde_yaml::Value::Null => Node::Null,
        serde_yaml::Value::Bool(b) => Node::Bool(b),
        serde_yaml::Value::Number(n) => Node::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_yaml::Value::String(s) => Node::String(s),
        serde_yaml::Value::Sequence(seq) => {
            Node::Array(seq.into_iter().map(yaml_to_node).collect())
        }
        serde_yaml::Value::Mapping(map) => {
            let map: BTreeMap<String, Node> = map
                .into_iter()
                .map(|(k, v)| (yaml_key(k), yaml_to_node(v)))
                .collect();
            Node::Object(map)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_node(tagged.value),
    }
}

fn yaml_key(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Null => "null".to_string(),
        other => format!("{:?}", other),
    }
}

fn toml_to_node(value: toml::Value) -> Node {
    match value {
        toml::Value::String(s) => Node::String(s),
        toml::Value::Integer(i) => Node::Number(i as f64),
        toml::Value::Float(f) => Node::Number(f),
        toml::Value::Boolean(b) => Node::Bool(b),
        toml::Value::Datetime(d) => Node::Datetime(d.to_string()),
        toml::Value::Array(arr) => Node::Array(arr.into_iter().map(toml_to_node).collect()),
        toml::Value::Table(table) => {
            let map: BTreeMap<String, Node> = table
                .into_iter()
                .map(|(k, v)| (k, toml_to_node(v)))
                .collect();
            Node::Object(map)
        }
    }
}
