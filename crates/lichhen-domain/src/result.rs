//! Extraction and prediction records

use crate::clock::{ClockTime, TimeRange};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Scheduling details recovered from one text
///
/// Every field is independently optional. An absent field is a normal outcome,
/// not an error. `end_time` is only ever set together with `start_time`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Calendar date of the appointment
    pub date: Option<NaiveDate>,

    /// Start time
    pub start_time: Option<ClockTime>,

    /// End time
    pub end_time: Option<ClockTime>,

    /// Short label for the appointment
    pub title: Option<String>,
}

impl ExtractionResult {
    /// Assemble a result from the three parser outputs
    pub fn new(date: Option<NaiveDate>, time: Option<TimeRange>, title: Option<String>) -> Self {
        Self {
            date,
            start_time: time.map(|t| t.start),
            end_time: time.map(|t| t.end),
            title,
        }
    }

    /// True when neither a date nor a time was found
    pub fn is_unscheduled(&self) -> bool {
        self.date.is_none() && self.start_time.is_none()
    }
}

/// Classifier verdict for a single text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Whether the classifier score met the threshold
    pub is_appointment: bool,

    /// Classifier score rounded to four decimals
    pub confidence: f64,

    /// Extracted details, only present for appointments
    pub details: Option<ExtractionResult>,
}

/// Classifier verdict for one item of a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchPrediction {
    /// The input text this item belongs to
    pub text: String,

    /// Whether the classifier score met the threshold
    pub is_appointment: bool,

    /// Classifier score rounded to four decimals
    pub confidence: f64,

    /// Extracted details, only present for appointments
    pub details: Option<ExtractionResult>,
}

impl BatchPrediction {
    /// Attach the originating text to a single prediction
    pub fn from_prediction(text: impl Into<String>, prediction: Prediction) -> Self {
        Self {
            text: text.into(),
            is_appointment: prediction.is_appointment,
            confidence: prediction.confidence,
            details: prediction.details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_requires_start() {
        let result = ExtractionResult::new(None, None, Some("Họp".to_string()));
        assert!(result.start_time.is_none());
        assert!(result.end_time.is_none());
        assert!(result.is_unscheduled());
    }

    #[test]
    fn test_json_shape() {
        let start = ClockTime::new(14, 0).unwrap();
        let end = ClockTime::new(16, 30).unwrap();
        let result = ExtractionResult::new(
            NaiveDate::from_ymd_opt(2025, 12, 23),
            Some(TimeRange::new(start, end)),
            Some("Họp".to_string()),
        );

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["date"], "2025-12-23");
        assert_eq!(json["startTime"], "14:00");
        assert_eq!(json["endTime"], "16:30");
        assert_eq!(json["title"], "Họp");
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let json = serde_json::to_value(ExtractionResult::default()).unwrap();
        assert!(json["date"].is_null());
        assert!(json["startTime"].is_null());
        assert!(json["endTime"].is_null());
        assert!(json["title"].is_null());
    }

    #[test]
    fn test_batch_prediction_keeps_text() {
        let prediction = Prediction {
            is_appointment: false,
            confidence: 0.12,
            details: None,
        };
        let item = BatchPrediction::from_prediction("xin chào", prediction);
        assert_eq!(item.text, "xin chào");
        assert!(!item.is_appointment);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["isAppointment"], false);
    }
}
