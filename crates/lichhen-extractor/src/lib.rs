//! Lichhen Extractor
//!
//! Rule-based extraction of appointment details from informal Vietnamese text.
//!
//! # Overview
//!
//! Once an upstream classifier has decided that a message is about an
//! appointment, the Extractor works out *when* and *what*: a calendar date, a
//! start/end time and a short title. Extraction is a pure function of the text
//! (and of "today" for relative words) and never fails; anything it cannot
//! find is reported as absent.
//!
//! # Architecture
//!
//! ```text
//!            ┌─> DateParser  ─> date
//! Text ──────┼─> TimeParser  ─> (start, end)  ──> ExtractionResult
//!            └─> TitleParser ─> title
//! ```
//!
//! Each parser walks a fixed, ordered list of rules and stops at the first
//! rule that matches.
//!
//! # Example Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use lichhen_extractor::{Extractor, ExtractorConfig};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
//! let extractor = Extractor::new(ExtractorConfig::default().with_reference_date(today)).unwrap();
//!
//! let result = extractor.extract("Họp lúc 9h mai");
//! assert_eq!(result.date, NaiveDate::from_ymd_opt(2025, 12, 2));
//! assert_eq!(result.start_time.unwrap().to_string(), "09:00");
//! assert_eq!(result.end_time.unwrap().to_string(), "10:00");
//! assert_eq!(result.title.as_deref(), Some("Họp lúc"));
//! ```

#![warn(missing_docs)]

mod config;
mod date;
mod error;
mod extractor;
mod patterns;
mod time;
mod title;


pub use config::{ExtractorConfig, DEFAULT_PLACEHOLDER_TITLE};
pub use date::{next_weekday, DateParser};
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use time::{DayPeriod, TimeParser};
pub use title::TitleParser;
