//! Set comparison of leaf paths.
//!
//! Two documents are equal when their leaf-path collections contain the same
//! paths. Order is irrelevant; multiplicity only counts through the length
//! check.
//!
//! # Examples
//!
//! ```
//! use leafcmp::compare::compare_paths;
//!
//! let first = vec!["(a)#BOOL#true".to_string(), "(b)#NIL#".to_string()];
//! let second = vec!["(b)#NIL#".to_string(), "(a)#BOOL#true".to_string()];
//!
//! let result = compare_paths(&first, &second);
//! assert!(result.is_equal);
//! ```

use crate::error::LinearizeError;
use crate::linearize::{leaf_paths, LinearizeConfig};
use crate::tree::Node;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// Verdict of a comparison plus both path listings for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    /// True when both documents have the same set of leaf paths
    pub is_equal: bool,
    /// Leaf paths of the first document, newline separated
    pub first_paths: String,
    /// Leaf paths of the second document, newline separated
    pub second_paths: String,
}

impl ComparisonResult {
    pub fn first_path_count(&self) -> usize {
        count_lines(&self.first_paths)
    }

    pub fn second_path_count(&self) -> usize {
        count_lines(&self.second_paths)
    }

    /// Paths listed for the first document but not the second, sorted.
    pub fn only_in_first(&self) -> Vec<&str> {
        one_sided(&self.first_paths, &self.second_paths)
    }

    /// Paths listed for the second document but not the first, sorted.
    pub fn only_in_second(&self) -> Vec<&str> {
        one_sided(&self.second_paths, &self.first_paths)
    }
}

/// Compares two path collections as sets.
///
/// Collections of different lengths are unequal without further inspection.
pub fn compare_paths(first: &[String], second: &[String]) -> ComparisonResult {
    let is_equal = same_path_set(first, second);
    tracing::debug!(
        first = first.len(),
        second = second.len(),
        is_equal,
        "compared leaf paths"
    );

    ComparisonResult {
        is_equal,
        first_paths: first.join("\n"),
        second_paths: second.join("\n"),
    }
}

/// Linearizes both trees and compares their paths.
pub fn compare_trees(
    first: &Node,
    second: &Node,
    config: &LinearizeConfig,
) -> Result<ComparisonResult, LinearizeError> {
    let first_paths = leaf_paths(first, config)?;
    let second_paths = leaf_paths(second, config)?;
    Ok(compare_paths(&first_paths, &second_paths))
}

fn same_path_set(first: &[String], second: &[String]) -> bool {
    if first.is_empty() && second.is_empty() {
        return true;
    }

    if first.len() != second.len() {
        return false;
    }

    let first_set: HashSet<&str> = first.iter().map(String::as_str).collect();
    second.iter().all(|path| first_set.contains(path.as_str()))
}

fn count_lines(listing: &str) -> usize {
    if listing.is_empty() {
        0
    } else {
        listing.split('\n').count()
    }
}

fn one_sided<'a>(listing: &'a str, other: &str) -> Vec<&'a str> {
    let other: HashSet<&str> = split_listing(other).collect();
    split_listing(listing)
        .filter(|path| !other.contains(path))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn split_listing(listing: &str) -> impl Iterator<Item = &str> {
    listing.split('\n').filter(|line| !line.is_empty())
}
