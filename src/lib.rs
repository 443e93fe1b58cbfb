//! leafcmp - order-insensitive equality for structured data.
//!
//! Two documents are considered equal when they hold the same leaf values at
//! the same structural positions, regardless of how keys or sequence elements
//! are ordered. Each document is flattened into a set of canonical leaf paths
//! and the two sets are compared.
//!
//! # Example
//!
//! ```no_run
//! use leafcmp::{compare_files, format_result, CompareConfig, OutputFormat, OutputOptions};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let result = compare_files(
//!     Path::new("old.json"),
//!     Path::new("new.json"),
//!     &CompareConfig::default(),
//! )?;
//!
//! let output = format_result(&result, &OutputFormat::Terminal, &OutputOptions::default())?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod compare;
pub mod document;
pub mod error;
pub mod linearize;
pub mod output;
pub mod parser;
pub mod tree;

// Re-export commonly used types for convenience
pub use compare::{compare_paths, compare_trees, ComparisonResult};
pub use document::{
    compare_documents, compare_documents_with, compare_files, compare_nodes, load_file,
    CompareConfig,
};
pub use error::{CompareError, LinearizeError, OutputError, ParseError};
pub use linearize::{leaf_paths, KeyPolicy, LinearizeConfig, NullPolicy, SequencePolicy};
pub use output::{format_result, OutputFormat, OutputOptions};
pub use parser::{
    parse_bytes, parse_content, parse_file, parse_json, parse_stdin, parse_toml, parse_yaml,
    FormatHint,
};
pub use tree::Node;
