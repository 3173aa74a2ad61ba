//! Error types for docglow
//!
//! Highlighting itself never fails; these cover loading user-defined
//! rules, reading configuration and the command-line front end.

use thiserror::Error;

/// Result type alias for docglow operations
pub type Result<T> = std::result::Result<T, GlowError>;

/// Error types
#[derive(Error, Debug)]
pub enum GlowError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid pattern for {language}.{rule}: {source}")]
    Pattern {
        language: String,
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("unknown rule category: {0}")]
    UnknownCategory(String),

    #[error("unknown token class: {0}")]
    UnknownClass(String),

    #[error("invalid rule {language}.{rule}: {reason}")]
    InvalidRule {
        language: String,
        rule: String,
        reason: String,
    },

    #[error("{0}")]
    Message(String),
}
