//! Error types for pattern construction and format lookup.
//!
//! Transformation itself has no error surface: blank or non-matching
//! input passes through unchanged, and degraded substitutions (absent
//! capture groups, unknown flag letters) resolve silently. Errors arise
//! only while building a pattern from a source string or resolving a
//! format name against the registry.

use std::fmt;

/// Result type alias for fallible construction operations.
pub type ImposeResult<T> = Result<T, ImposeError>;

/// Error type for the formatting library.
#[derive(Debug)]
pub enum ImposeError {
    /// Pattern source string failed to compile
    PatternError { pattern: String, reason: String },

    /// Format name not present in the registry
    UnknownFormat { name: String, available: Vec<String> },
}

impl fmt::Display for ImposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PatternError { pattern, reason } => {
                write!(f, "Pattern error for '{}': {}", pattern, reason)
            }
            Self::UnknownFormat { name, available } => {
                write!(
                    f,
                    "Unknown format '{}' (available: {})",
                    name,
                    available.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for ImposeError {}

impl From<regex::Error> for ImposeError {
    fn from(err: regex::Error) -> Self {
        Self::PatternError {
            pattern: "<unknown>".to_string(),
            reason: err.to_string(),
        }
    }
}
