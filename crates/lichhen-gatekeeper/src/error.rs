//! Gatekeeper error types

use thiserror::Error;

/// Errors that can occur during gatekeeper operations
#[derive(Error, Debug, PartialEq)]
pub enum GatekeeperError {
    /// Input text is empty
    #[error("Text is empty")]
    EmptyText,

    /// Input text exceeds the configured length
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// Classifier failed to score the input
    #[error("Classifier error: {0}")]
    Classifier(String),

    /// Classifier returned a score outside [0, 1]
    #[error("Invalid classifier score: {0}")]
    InvalidScore(f64),

    /// Classifier returned the wrong number of scores for a batch
    #[error("Classifier returned {actual} scores for {expected} texts")]
    ScoreCountMismatch {
        /// Number of texts submitted
        expected: usize,
        /// Number of scores returned
        actual: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
