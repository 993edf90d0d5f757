//! Classifier gate in front of the extractor

use crate::{GateConfig, GatekeeperError};
use lichhen_domain::traits::{AppointmentClassifier, DetailExtractor};
use lichhen_domain::{BatchPrediction, Prediction};
use std::fmt::Display;
use tracing::{debug, info};

/// The Gatekeeper scores texts and extracts details for appointments only
pub struct Gatekeeper<C, E> {
    classifier: C,
    extractor: E,
    config: GateConfig,
}

impl<C, E> Gatekeeper<C, E>
where
    C: AppointmentClassifier,
    C::Error: Display,
    E: DetailExtractor,
{
    /// Create a new Gatekeeper
    pub fn new(classifier: C, extractor: E, config: GateConfig) -> Result<Self, GatekeeperError> {
        config.validate().map_err(GatekeeperError::Config)?;
        Ok(Self {
            classifier,
            extractor,
            config,
        })
    }

    /// Current configuration
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Classify a single text
    ///
    /// The text must be non-empty and at most `max_text_length` characters.
    /// Details are extracted only when the score reaches the threshold.
    pub fn predict(&self, text: &str) -> Result<Prediction, GatekeeperError> {
        self.check_length(text)?;

        let score = self
            .classifier
            .score(text)
            .map_err(|e| GatekeeperError::Classifier(e.to_string()))?;

        self.decide(text, score)
    }

    /// Classify several texts in one classifier call
    ///
    /// Output order matches input order. Length limits are not applied to
    /// batch items.
    pub fn predict_batch(&self, texts: &[String]) -> Result<Vec<BatchPrediction>, GatekeeperError> {
        let scores = self
            .classifier
            .score_batch(texts)
            .map_err(|e| GatekeeperError::Classifier(e.to_string()))?;

        if scores.len() != texts.len() {
            return Err(GatekeeperError::ScoreCountMismatch {
                expected: texts.len(),
                actual: scores.len(),
            });
        }

        let predictions = texts
            .iter()
            .zip(scores)
            .map(|(text, score)| {
                self.decide(text, score)
                    .map(|prediction| BatchPrediction::from_prediction(text.as_str(), prediction))
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            "Classified batch of {} texts, {} appointments",
            predictions.len(),
            predictions.iter().filter(|p| p.is_appointment).count()
        );
        Ok(predictions)
    }

    fn check_length(&self, text: &str) -> Result<(), GatekeeperError> {
        let len = text.chars().count();
        if len == 0 {
            return Err(GatekeeperError::EmptyText);
        }
        if len > self.config.max_text_length {
            return Err(GatekeeperError::TextTooLong(len, self.config.max_text_length));
        }
        Ok(())
    }

    fn decide(&self, text: &str, score: f64) -> Result<Prediction, GatekeeperError> {
        if !(0.0..=1.0).contains(&score) {
            return Err(GatekeeperError::InvalidScore(score));
        }

        let is_appointment = score >= self.config.threshold;
        debug!(
            "Score {:.4} vs threshold {:.2}: appointment={}",
            score, self.config.threshold, is_appointment
        );

        Ok(Prediction {
            is_appointment,
            confidence: round_confidence(score),
            details: is_appointment.then(|| self.extractor.extract_details(text)),
        })
    }
}

/// Round to 4 decimal places
fn round_confidence(score: f64) -> f64 {
    (score * 10_000.0).round() / 10_000.0
}
