//! Leaf-path linearization.
//!
//! A tree is flattened into one path string per leaf. Each path records the
//! walk from the root: `(key)` for every mapping entry, `[]` for every
//! sequence, and a typed marker for the leaf itself. Because a path never
//! mentions sibling positions, reordering keys or sequence elements yields
//! the same collection of paths.
//!
//! ```text
//! {"user": {"name": "Ann", "admin": true, "tags": ["a"], "note": null}}
//!
//! (user)(admin)#BOOL#true
//! (user)(name)#STRING#"Ann"
//! (user)(note)#NIL#
//! (user)(tags)[]#STRING#"a"
//! ```
//!
//! # Examples
//!
//! ```
//! use leafcmp::linearize::{leaf_paths, LinearizeConfig};
//! use leafcmp::parser::parse_json;
//!
//! let tree = parse_json(r#"{"x": {"y": "z"}}"#).unwrap();
//! let paths = leaf_paths(&tree, &LinearizeConfig::default()).unwrap();
//! assert_eq!(paths, vec![r#"(x)(y)#STRING#"z""#.to_string()]);
//! ```

use crate::error::LinearizeError;
use crate::tree::Node;
use std::borrow::Cow;

pub const NIL_MARKER: &str = "#NIL#";
pub const STRING_MARKER: &str = "#STRING#";
pub const BOOL_MARKER: &str = "#BOOL#";
pub const SEQUENCE_MARKER: &str = "[]";

const PREVIEW_LEN: usize = 40;

/// Which sequence elements contribute leaf paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequencePolicy {
    /// Every element is walked
    #[default]
    AllElements,
    /// Only index 0 is walked; later elements are silently ignored
    FirstElement,
}

/// How a mapping entry holding null is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullPolicy {
    /// `(key)#NIL#`
    #[default]
    KeepKey,
    /// `#NIL#` on the parent prefix, the key name is lost
    DropKey,
}

/// How mapping keys are written into `(key)` segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyPolicy {
    /// `\`, `(` and `)` are backslash-escaped and control characters use
    /// Rust escapes, so `{"a)(b": ..}` and `{"a": {"b": ..}}` stay distinct
    /// and every path fits on one line. Plain keys are written unchanged.
    #[default]
    Escaped,
    /// The key is inserted verbatim
    Raw,
}

/// Configuration for the linearizer.
///
/// The default walks every sequence element, keeps the key of null entries
/// and escapes key delimiters. [`LinearizeConfig::legacy`] selects the
/// first-element-only, key-dropping and raw-key encodings, for checking
/// output against older path listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinearizeConfig {
    pub sequence_policy: SequencePolicy,
    pub null_policy: NullPolicy,
    pub key_policy: KeyPolicy,
}

impl LinearizeConfig {
    /// The encoding older path listings were produced with.
    pub fn legacy() -> Self {
        Self {
            sequence_policy: SequencePolicy::FirstElement,
            null_policy: NullPolicy::DropKey,
            key_policy: KeyPolicy::Raw,
        }
    }
}

/// Flattens a tree into its leaf paths.
///
/// Paths are returned in traversal order: mapping entries in key order,
/// sequence elements in index order. Callers compare them as a set, so the
/// order carries no meaning.
///
/// # Arguments
///
/// * `root` - The tree to walk. Any node is accepted; document entry points
///   check for a mapping root before calling this.
/// * `config` - Sequence, null and key encodings to apply
///
/// # Returns
///
/// One path per leaf reached. Empty mappings and empty sequences contribute
/// nothing, so `{}` yields an empty list.
///
/// # Errors
///
/// Returns `LinearizeError::UnsupportedType` as soon as a number or datetime
/// is reached. No partial list is returned.
///
/// # Examples
///
/// ```
/// use leafcmp::linearize::{leaf_paths, LinearizeConfig};
/// use leafcmp::parser::parse_json;
///
/// let tree = parse_json(r#"{"a(1)": [null, true]}"#).unwrap();
/// let paths = leaf_paths(&tree, &LinearizeConfig::default()).unwrap();
/// assert_eq!(paths, vec![r"(a\(1\))[]#NIL#", r"(a\(1\))[]#BOOL#true"]);
/// ```
pub fn leaf_paths(root: &Node, config: &LinearizeConfig) -> Result<Vec<String>, LinearizeError> {
    let mut paths = Vec::new();
    walk(root, "", &mut paths, config)?;
    tracing::debug!(leaves = paths.len(), "linearized tree");
    Ok(paths)
}

/// Escapes a mapping key for use inside a `(key)` segment.
///
/// Keys without delimiters, backslashes or control characters are borrowed
/// unchanged.
pub fn escape_key(key: &str) -> Cow<'_, str> {
    let needs_escape = |c: char| matches!(c, '(' | ')' | '\\') || c.is_control();
    if !key.chars().any(needs_escape) {
        return Cow::Borrowed(key);
    }

    let mut escaped = String::with_capacity(key.len() + 2);
    for c in key.chars() {
        match c {
            '(' | ')' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            c if c.is_control() => escaped.extend(c.escape_default()),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

fn walk(
    node: &Node,
    prefix: &str,
    paths: &mut Vec<String>,
    config: &LinearizeConfig,
) -> Result<(), LinearizeError> {
    match node {
        Node::Object(map) => {
            for (key, value) in map {
                if matches!(value, Node::Null) && config.null_policy == NullPolicy::DropKey {
                    emit(paths, format!("{prefix}{NIL_MARKER}"));
                    continue;
                }
                let key = match config.key_policy {
                    KeyPolicy::Escaped => escape_key(key),
                    KeyPolicy::Raw => Cow::Borrowed(key.as_str()),
                };
                walk(value, &format!("{prefix}({key})"), paths, config)?;
            }
        }
        Node::Array(items) => {
            let path = format!("{prefix}{SEQUENCE_MARKER}");
            let items = match config.sequence_policy {
                SequencePolicy::AllElements => items.as_slice(),
                SequencePolicy::FirstElement => &items[..items.len().min(1)],
            };
            for item in items {
                walk(item, &path, paths, config)?;
            }
        }
        Node::String(s) => emit(paths, format!("{prefix}{STRING_MARKER}{s:?}")),
        Node::Bool(b) => emit(paths, format!("{prefix}{BOOL_MARKER}{b}")),
        Node::Null => emit(paths, format!("{prefix}{NIL_MARKER}")),
        Node::Number(_) | Node::Datetime(_) => {
            return Err(LinearizeError::unsupported_type(
                node.type_name(),
                node.preview(PREVIEW_LEN),
                prefix,
            ));
        }
    }

    Ok(())
}

fn emit(paths: &mut Vec<String>, path: String) {
    tracing::trace!(%path, "leaf");
    paths.push(path);
}
