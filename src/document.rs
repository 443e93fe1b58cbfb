//! End-to-end document comparison.
//!
//! Load both documents, linearize each, compare the path sets. The first
//! error from any stage is returned unchanged.

use crate::compare::{compare_trees, ComparisonResult};
use crate::error::{CompareError, ParseError};
use crate::linearize::LinearizeConfig;
use crate::parser::{ensure_mapping, parse_bytes, parse_file_as, FormatHint};
use crate::tree::Node;
use std::path::Path;

const FIRST_SOURCE: &str = "<first>";
const SECOND_SOURCE: &str = "<second>";

/// Settings for a whole comparison run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareConfig {
    /// Syntax of the inputs. `Auto` uses the file extension where there is
    /// one and otherwise tries each format.
    pub format: FormatHint,
    pub linearize: LinearizeConfig,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            format: FormatHint::Json,
            linearize: LinearizeConfig::default(),
        }
    }
}

/// Compares two JSON documents held in memory.
///
/// # Examples
///
/// ```
/// use leafcmp::compare_documents;
///
/// let result = compare_documents(br#"{"a": "1", "b": true}"#, br#"{"b": true, "a": "1"}"#).unwrap();
/// assert!(result.is_equal);
///
/// let result = compare_documents(br#"{"x": "1"}"#, br#"{"x": "2"}"#).unwrap();
/// assert!(!result.is_equal);
/// ```
pub fn compare_documents(first: &[u8], second: &[u8]) -> Result<ComparisonResult, CompareError> {
    compare_documents_with(first, second, &CompareConfig::default())
}

/// Compares two in-memory documents with explicit settings.
pub fn compare_documents_with(
    first: &[u8],
    second: &[u8],
    config: &CompareConfig,
) -> Result<ComparisonResult, CompareError> {
    let first = parse_bytes(first, config.format, FIRST_SOURCE)?;
    let first = ensure_mapping(first, FIRST_SOURCE)?;
    let second = parse_bytes(second, config.format, SECOND_SOURCE)?;
    let second = ensure_mapping(second, SECOND_SOURCE)?;

    Ok(compare_trees(&first, &second, &config.linearize)?)
}

/// Loads one document from disk and checks that its root is a mapping.
///
/// # Errors
///
/// Any `ParseError` from [`parse_file_as`], or `ParseError::NotAMapping`
/// naming the file.
pub fn load_file(path: &Path, format: FormatHint) -> Result<Node, ParseError> {
    let tree = parse_file_as(path, format)?;
    ensure_mapping(tree, &path.to_string_lossy())
}

/// Reads and compares two files.
///
/// # Arguments
///
/// * `first` - Path to the first document
/// * `second` - Path to the second document
/// * `config` - Input format and linearization settings
///
/// # Errors
///
/// The first failure while loading, linearizing or comparing, in that
/// order. The first file is fully loaded before the second is opened.
pub fn compare_files(
    first: &Path,
    second: &Path,
    config: &CompareConfig,
) -> Result<ComparisonResult, CompareError> {
    tracing::debug!(first = %first.display(), second = %second.display(), "comparing files");

    let first_tree = load_file(first, config.format)?;
    let second_tree = load_file(second, config.format)?;

    Ok(compare_trees(&first_tree, &second_tree, &config.linearize)?)
}

/// Compares two already parsed trees.
///
/// Both roots must be mappings, just like loaded documents.
pub fn compare_nodes(
    first: Node,
    second: Node,
    config: &CompareConfig,
) -> Result<ComparisonResult, CompareError> {
    let first = ensure_mapping(first, FIRST_SOURCE)?;
    let second = ensure_mapping(second, SECOND_SOURCE)?;

    Ok(compare_trees(&first, &second, &config.linearize)?)
}
