//! Error types for the Extractor
//!
//! Extraction itself never fails. These errors only surface while building an
//! extractor or loading its configuration.

use thiserror::Error;

/// Errors that can occur while constructing an extractor
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// A lookup-table or rule pattern failed to compile
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for ExtractorError {
    fn from(e: toml::de::Error) -> Self {
        ExtractorError::Config(format!("Failed to parse TOML: {}", e))
    }
}

impl From<toml::ser::Error> for ExtractorError {
    fn from(e: toml::ser::Error) -> Self {
        ExtractorError::Config(format!("Failed to serialize to TOML: {}", e))
    }
}
