//! Lichhen Domain Layer
//!
//! Value types and trait seams shared by every Lichhen crate. Nothing in here
//! parses text; it only describes what an extraction produces and which
//! collaborators the extraction pipeline talks to.
//!
//! ## Key Concepts
//!
//! - **ClockTime**: a wall-clock time rendered as zero-padded `HH:MM`
//! - **TimeRange**: a `(start, end)` pair of clock times
//! - **ExtractionResult**: date, time range and title recovered from one text
//! - **Prediction**: a classifier verdict plus the optional extracted details
//!
//! ## Architecture
//!
//! - Pure data and trait definitions only
//! - The rule engine lives in `lichhen-extractor`
//! - The classifier threshold gate lives in `lichhen-gatekeeper`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod result;
pub mod traits;

// Re-exports for convenience
pub use clock::{ClockTime, TimeRange};
pub use result::{BatchPrediction, ExtractionResult, Prediction};
