//! Configuration for the Extractor

use crate::error::ExtractorError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Title returned when nothing is left of the first line after cleanup
pub const DEFAULT_PLACEHOLDER_TITLE: &str = "Lịch hẹn";

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Pin "today" to a fixed date instead of the local calendar date
    ///
    /// Relative words ("mai", "thứ 3", ...) and year-less numeric dates are
    /// resolved against this date. Used for replays and tests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<NaiveDate>,

    /// Title used when the cleaned first line is empty
    #[serde(default = "default_placeholder_title")]
    pub placeholder_title: String,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.placeholder_title.trim().is_empty() {
            return Err(ExtractorError::Config(
                "placeholder_title must not be empty".to_string(),
            ));
        }
        if self.placeholder_title.contains('\n') {
            return Err(ExtractorError::Config(
                "placeholder_title must be a single line".to_string(),
            ));
        }
        Ok(())
    }

    /// Pin the reference date
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            reference_date: None,
            placeholder_title: default_placeholder_title(),
        }
    }
}

fn default_placeholder_title() -> String {
    DEFAULT_PLACEHOLDER_TITLE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.placeholder_title, "Lịch hẹn");
        assert!(config.reference_date.is_none());
    }

    #[test]
    fn test_empty_placeholder_rejected() {
        let mut config = ExtractorConfig::default();
        config.placeholder_title = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::default()
            .with_reference_date(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = ExtractorConfig::from_toml(r#"reference_date = "2026-01-15""#).unwrap();
        assert_eq!(parsed.reference_date, NaiveDate::from_ymd_opt(2026, 1, 15));
        assert_eq!(parsed.placeholder_title, DEFAULT_PLACEHOLDER_TITLE);
    }

    #[test]
    fn test_invalid_toml() {
        let result = ExtractorConfig::from_toml("reference_date = 12");
        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }
}
