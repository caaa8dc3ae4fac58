//! Error types for reading configuration releases.

use std::path::PathBuf;

/// Errors that can occur while turning configuration text into a release.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Well-formed text missing fields required for structural completeness.
    #[error(
        "Could not read the crosstool configuration file '{source_id}', because of an incomplete protocol buffer (missing: {})",
        .missing.join(", ")
    )]
    Incomplete {
        /// Source identifier the text was read from.
        source_id: String,
        /// Dotted paths of the missing required fields, in document order.
        missing: Vec<String>,
    },

    /// Text that could not be tokenized or structured.
    #[error(
        "Could not read the crosstool configuration file '{source_id}', because of a parser error ({detail})"
    )]
    Syntax {
        /// Source identifier the text was read from.
        source_id: String,
        /// Location and description of the problem.
        detail: String,
    },

    /// The configuration source could not be read.
    #[error("I/O error reading '{}': {source}", path.display())]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl ParseError {
    /// Source identifier this error refers to.
    pub fn source_id(&self) -> String {
        match self {
            ParseError::Incomplete { source_id, .. } | ParseError::Syntax { source_id, .. } => {
                source_id.clone()
            }
            ParseError::Io { path, .. } => path.display().to_string(),
        }
    }
}

/// Result type for parse operations.
pub type Result<T> = std::result::Result<T, ParseError>;
