//! Lichhen Gatekeeper
//!
//! Decides whether a text should go through detail extraction at all.
//!
//! The Gatekeeper provides:
//! - Input length validation
//! - Classifier scoring, single and batched
//! - Threshold comparison (`score >= threshold` means appointment)
//! - Detail extraction only for texts that pass the threshold
//!
//! # Examples
//!
//! ```
//! use lichhen_gatekeeper::{GateConfig, Gatekeeper, StaticClassifier};
//! use lichhen_domain::traits::DetailExtractor;
//! use lichhen_domain::ExtractionResult;
//!
//! struct TitleOnly;
//!
//! impl DetailExtractor for TitleOnly {
//!     fn extract_details(&self, text: &str) -> ExtractionResult {
//!         ExtractionResult::new(None, None, Some(text.to_string()))
//!     }
//! }
//!
//! let gatekeeper = Gatekeeper::new(StaticClassifier::new(0.9), TitleOnly, GateConfig::default()).unwrap();
//! let prediction = gatekeeper.predict("Họp lúc 9h mai").unwrap();
//! assert!(prediction.is_appointment);
//! assert!(prediction.details.is_some());
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod error;
mod gate;

pub use classifier::{ClassifierError, StaticClassifier};
pub use config::GateConfig;
pub use error::GatekeeperError;
pub use gate::Gatekeeper;
