//! Error types for grammar construction and configuration
//!
//! Highlighting itself never fails; these errors only surface while
//! grammars are being built, registered, or loaded from configuration.

use thiserror::Error;

/// Result type alias for grammar operations
pub type Result<T> = std::result::Result<T, GrammarError>;

/// Grammar error types
#[derive(Error, Debug)]
pub enum GrammarError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid {rule} pattern for language '{language}': {source}")]
    InvalidPattern {
        language: String,
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("Language identifier must not be empty")]
    EmptyIdentifier,

    #[error("Language identifier already registered: {0}")]
    DuplicateIdentifier(String),

    #[error("Unknown span kind: {0}")]
    UnknownSpanKind(String),

    #[error("Unknown secondary kind: {0}")]
    UnknownSecondaryKind(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
