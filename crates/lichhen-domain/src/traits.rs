//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the extraction core and the
//! collaborators around it. Implementations live in other crates or in the
//! host application.

use crate::ExtractionResult;

/// Binary appointment classifier
///
/// Implemented by the host (a learned model in production, heuristics in
/// tests). Scores are probabilities in `[0, 1]` that the text describes an
/// appointment.
pub trait AppointmentClassifier {
    /// Error type for classifier operations
    type Error;

    /// Score a single text
    fn score(&self, text: &str) -> Result<f64, Self::Error>;

    /// Score a batch of texts, returning one score per input in order
    ///
    /// The default scores each text independently. Model-backed classifiers
    /// override this to run the batch in one pass.
    fn score_batch(&self, texts: &[String]) -> Result<Vec<f64>, Self::Error> {
        texts.iter().map(|text| self.score(text)).collect()
    }
}

/// Extracts scheduling details from text
///
/// Implemented by the application layer (lichhen-extractor). Extraction never
/// fails: missing information is reported as absent fields.
pub trait DetailExtractor {
    /// Extract date, time range and title from one text
    fn extract_details(&self, text: &str) -> ExtractionResult;
}
