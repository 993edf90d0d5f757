//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::date::DateParser;
use crate::error::ExtractorError;
use crate::time::TimeParser;
use crate::title::TitleParser;
use chrono::{Local, NaiveDate};
use lichhen_domain::traits::DetailExtractor;
use lichhen_domain::ExtractionResult;
use tracing::{debug, info};

/// The Extractor turns an appointment message into date, time and title
///
/// All three parsers run independently on the same text; one parser finding
/// nothing never stops the others. The extractor holds only compiled patterns
/// and read-only tables, so a single instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Extractor {
    dates: DateParser,
    times: TimeParser,
    titles: TitleParser,
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate()?;
        Ok(Self {
            dates: DateParser::new()?,
            times: TimeParser::new()?,
            titles: TitleParser::new(config.placeholder_title.clone())?,
            config,
        })
    }

    /// The configuration this extractor was built with
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// The date relative words are resolved against
    ///
    /// The pinned `reference_date` when configured, otherwise the local date.
    pub fn reference_date(&self) -> NaiveDate {
        self.config
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Extract scheduling details from one text
    pub fn extract(&self, text: &str) -> ExtractionResult {
        self.extract_on(text, self.reference_date())
    }

    /// Extract scheduling details, resolving relative dates against `today`
    pub fn extract_on(&self, text: &str, today: NaiveDate) -> ExtractionResult {
        let date = self.dates.extract_date_on(text, today);
        let time = self.times.extract_time(text);
        let title = self.titles.extract_title(text);

        debug!(
            date = ?date,
            time = ?time.map(|t| t.to_string()),
            title = %title,
            "extracted details"
        );

        ExtractionResult::new(date, time, Some(title))
    }

    /// Extract details for every text, one result per input in input order
    pub fn extract_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<ExtractionResult> {
        self.extract_batch_on(texts, self.reference_date())
    }

    /// Batch extraction against a fixed reference date
    pub fn extract_batch_on<S: AsRef<str>>(
        &self,
        texts: &[S],
        today: NaiveDate,
    ) -> Vec<ExtractionResult> {
        info!("Extracting details for {} texts", texts.len());

        let results: Vec<ExtractionResult> = texts
            .iter()
            .map(|text| self.extract_on(text.as_ref(), today))
            .collect();

        let scheduled = results.iter().filter(|r| !r.is_unscheduled()).count();
        info!(
            "Batch extraction complete: {} of {} texts carry a date or time",
            scheduled,
            results.len()
        );

        results
    }
}

impl DetailExtractor for Extractor {
    fn extract_details(&self, text: &str) -> ExtractionResult {
        self.extract(text)
    }
}
