use std::fmt;

use crate::bundle::version::CURRENT_SCHEMA_VERSION;

/// Unrecoverable failures of the annotation run.
///
/// Stages downstream of bundle reading are total over well-typed input, so
/// every variant here belongs to the boundary: reading, version gating, and
/// writing.
#[derive(Debug)]
pub enum SemanticError {
    /// Input bundle file could not be read
    BundleRead { path: String, source: std::io::Error },

    /// Output file or directory could not be written
    BundleWrite { path: String, source: std::io::Error },

    /// Input text is not valid JSON
    JsonParse { context: String, source: serde_json::Error },

    /// Output document could not be serialized
    JsonSerialize { context: String, source: serde_json::Error },

    /// Input text is empty or whitespace
    EmptyBundle,

    /// A required top-level field is absent
    MissingField(String),

    /// Bundle schemaVersion the consumer cannot accept
    IncompatibleVersion { found: String },
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticError::BundleRead { path, source } => {
                write!(f, "Failed to read bundle '{}': {}", path, source)
            }
            SemanticError::BundleWrite { path, source } => {
                write!(f, "Failed to write '{}': {}", path, source)
            }
            SemanticError::JsonParse { context, source } => {
                write!(f, "JSON parse error ({}): {}", context, source)
            }
            SemanticError::JsonSerialize { context, source } => {
                write!(f, "JSON serialize error ({}): {}", context, source)
            }
            SemanticError::EmptyBundle => {
                write!(f, "Bundle text is empty")
            }
            SemanticError::MissingField(field) => {
                write!(f, "Bundle is missing required field '{}'", field)
            }
            SemanticError::IncompatibleVersion { found } => {
                write!(
                    f,
                    "Bundle schemaVersion '{}' is incompatible with consumer version '{}'",
                    found, CURRENT_SCHEMA_VERSION
                )
            }
        }
    }
}

impl std::error::Error for SemanticError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SemanticError::BundleRead { source, .. } => Some(source),
            SemanticError::BundleWrite { source, .. } => Some(source),
            SemanticError::JsonParse { source, .. } => Some(source),
            SemanticError::JsonSerialize { source, .. } => Some(source),
            _ => None,
        }
    }
}
