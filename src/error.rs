//! Custom error types for leafcmp.

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Content of {path} is not valid UTF-8: {source}")]
    Encoding {
        path: String,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML in {path}: {source}")]
    YamlError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid TOML in {path}: {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not detect document format for {path}")]
    UnknownFormat { path: String },

    #[error("Root of {path} must be a mapping, found {found}")]
    NotAMapping { path: String, found: String },
}

#[derive(Debug, thiserror::Error)]
pub enum LinearizeError {
    #[error("type {kind} ({value}) in current path {path:?} not supported")]
    UnsupportedType {
        kind: String,
        value: String,
        path: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Unknown output format: {format}")]
    UnknownFormat { format: String },

    #[error("Failed to serialize to JSON: {source}")]
    JsonSerializationError {
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Linearize(#[from] LinearizeError),
}

impl ParseError {
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn read_error(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn encoding(path: impl Into<String>, source: std::str::Utf8Error) -> Self {
        Self::Encoding {
            path: path.into(),
            source,
        }
    }

    pub fn json_error(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::JsonError {
            path: path.into(),
            source,
        }
    }

    pub fn yaml_error(path: impl Into<String>, source: serde_yaml::Error) -> Self {
        Self::YamlError {
            path: path.into(),
            source,
        }
    }

    pub fn toml_error(path: impl Into<String>, source: toml::de::Error) -> Self {
        Self::TomlError {
            path: path.into(),
            source,
        }
    }

    pub fn unknown_format(path: impl Into<String>) -> Self {
        Self::UnknownFormat { path: path.into() }
    }

    pub fn not_a_mapping(path: impl Into<String>, found: impl Into<String>) -> Self {
        Self::NotAMapping {
            path: path.into(),
            found: found.into(),
        }
    }

    /// True when the byte source itself could not be obtained, as opposed to
    /// bytes that failed to decode.
    pub fn is_read_error(&self) -> bool {
        matches!(self, Self::FileNotFound { .. } | Self::ReadError { .. })
    }
}

impl LinearizeError {
    pub fn unsupported_type(
        kind: impl Into<String>,
        value: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self::UnsupportedType {
            kind: kind.into(),
            value: value.into(),
            path: path.into(),
        }
    }

    /// Path prefix reached when linearization stopped.
    pub fn path(&self) -> &str {
        match self {
            Self::UnsupportedType { path, .. } => path,
        }
    }
}
