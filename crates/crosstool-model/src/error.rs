//! Error types for descriptor model values.

/// Errors that can occur while constructing model values from strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A label string is not of the form `//package[:name]`.
    #[error("invalid label '{label}': {detail}")]
    InvalidLabel {
        /// The offending label text.
        label: String,
        /// What is wrong with it.
        detail: &'static str,
    },

    /// A mode name does not belong to the named mode axis.
    #[error("unknown {axis} '{value}' (expected one of: {expected})")]
    UnknownMode {
        /// The mode axis, e.g. "compilation mode".
        axis: &'static str,
        /// The rejected value.
        value: String,
        /// Comma-separated accepted values.
        expected: &'static str,
    },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
