//! Host-side classifier stand-ins
//!
//! The production classifier is a learned model served outside this
//! workspace. `StaticClassifier` replays scores that were computed elsewhere,
//! which is what the CLI and the tests need.

use lichhen_domain::traits::AppointmentClassifier;
use std::collections::HashMap;
use thiserror::Error;

/// Errors reported by the bundled classifiers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifierError {
    /// The classifier has no score for this text
    #[error("No score for text: {0}")]
    MissingScore(String),
}

/// Classifier that returns pre-computed scores
///
/// # Examples
///
/// ```
/// use lichhen_gatekeeper::StaticClassifier;
/// use lichhen_domain::traits::AppointmentClassifier;
///
/// let classifier = StaticClassifier::new(0.1).with_score("Họp lúc 9h mai", 0.97);
/// assert_eq!(classifier.score("Họp lúc 9h mai").unwrap(), 0.97);
/// assert_eq!(classifier.score("xin chào").unwrap(), 0.1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticClassifier {
    default_score: Option<f64>,
    scores: HashMap<String, f64>,
}

impl StaticClassifier {
    /// Score every text with `score` unless a specific score was registered
    pub fn new(score: f64) -> Self {
        Self {
            default_score: Some(score),
            scores: HashMap::new(),
        }
    }

    /// Only texts with a registered score can be classified
    pub fn strict() -> Self {
        Self::default()
    }

    /// Register the score for one text
    pub fn with_score(mut self, text: impl Into<String>, score: f64) -> Self {
        self.scores.insert(text.into(), score);
        self
    }
}

impl AppointmentClassifier for StaticClassifier {
    type Error = ClassifierError;

    fn score(&self, text: &str) -> Result<f64, Self::Error> {
        self.scores
            .get(text)
            .copied()
            .or(self.default_score)
            .ok_or_else(|| ClassifierError::MissingScore(text.to_string()))
    }
}
