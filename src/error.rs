//! Error types for prefix map contexts

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrefixMapError {
    #[error("Cannot set both upper AND lower case normalization on context '{context}'")]
    ConflictingCaseNormalization { context: String },

    #[error("Duplicate prefix '{0}': already used by another record")]
    DuplicatePrefix(String),

    #[error("Duplicate URI prefix '{0}': already used by another record")]
    DuplicateUriPrefix(String),

    #[error("Failed to read prefixes from {source_name}: {reason}")]
    Source { source_name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, PrefixMapError>;
