//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use lichhen_domain::{BatchPrediction, ClockTime, ExtractionResult, Prediction};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Texts longer than this are shortened in table cells.
const MAX_TEXT_WIDTH: usize = 40;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

/// One batch item as printed in JSON mode.
#[derive(Serialize)]
struct TextExtraction<'a> {
    text: &'a str,
    details: &'a ExtractionResult,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the details extracted from one text.
    pub fn format_extraction(&self, result: &ExtractionResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Table => Ok(self.details_table(result, None)),
            OutputFormat::Quiet => Ok(quiet_line(result)),
        }
    }

    /// Format batch extraction results, paired with their texts.
    pub fn format_extractions(&self, texts: &[String], results: &[ExtractionResult]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let items: Vec<TextExtraction> = texts
                    .iter()
                    .zip(results)
                    .map(|(text, details)| TextExtraction { text, details })
                    .collect();
                Ok(serde_json::to_string_pretty(&items)?)
            }
            OutputFormat::Table => {
                if results.is_empty() {
                    return Ok(self.colorize("No texts given.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "Text", "Date", "Start", "End", "Title"]);
                for (i, (text, result)) in texts.iter().zip(results).enumerate() {
                    builder.push_record([
                        (i + 1).to_string(),
                        shorten(text),
                        date_cell(result),
                        time_cell(result.start_time),
                        time_cell(result.end_time),
                        result.title.clone().unwrap_or_else(|| "-".to_string()),
                    ]);
                }
                Ok(render(builder))
            }
            OutputFormat::Quiet => Ok(results.iter().map(quiet_line).collect::<Vec<_>>().join("\n")),
        }
    }

    /// Format a gated prediction.
    pub fn format_prediction(&self, prediction: &Prediction) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(prediction)?),
            OutputFormat::Table => {
                let verdict = self.verdict(prediction.is_appointment, prediction.confidence);
                match &prediction.details {
                    Some(details) => Ok(self.details_table(details, Some(verdict))),
                    None => Ok(verdict),
                }
            }
            OutputFormat::Quiet => Ok(format!(
                "{}\t{:.4}",
                prediction.is_appointment, prediction.confidence
            )),
        }
    }

    /// Format batch predictions.
    pub fn format_predictions(&self, predictions: &[BatchPrediction]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(predictions)?),
            OutputFormat::Table => {
                if predictions.is_empty() {
                    return Ok(self.colorize("No texts given.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Text", "Appointment", "Confidence", "Date", "Start", "End", "Title"]);
                for p in predictions {
                    let details = p.details.clone().unwrap_or_default();
                    builder.push_record([
                        shorten(&p.text),
                        if p.is_appointment { "yes" } else { "no" }.to_string(),
                        format!("{:.4}", p.confidence),
                        date_cell(&details),
                        time_cell(details.start_time),
                        time_cell(details.end_time),
                        details.title.unwrap_or_else(|| "-".to_string()),
                    ]);
                }
                Ok(render(builder))
            }
            OutputFormat::Quiet => Ok(predictions
                .iter()
                .map(|p| format!("{}\t{:.4}", p.is_appointment, p.confidence))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn verdict(&self, is_appointment: bool, confidence: f64) -> String {
        if is_appointment {
            self.success(&format!("Appointment (confidence {:.4})", confidence))
        } else {
            self.warning(&format!("Not an appointment (confidence {:.4})", confidence))
        }
    }

    fn details_table(&self, result: &ExtractionResult, header: Option<String>) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["Date".to_string(), date_cell(result)]);
        builder.push_record(["Start".to_string(), time_cell(result.start_time)]);
        builder.push_record(["End".to_string(), time_cell(result.end_time)]);
        builder.push_record([
            "Title".to_string(),
            result.title.clone().unwrap_or_else(|| "-".to_string()),
        ]);

        let table = render(builder);
        match header {
            Some(header) => format!("{}\n{}", header, table),
            None => table,
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn date_cell(result: &ExtractionResult) -> String {
    result
        .date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn time_cell(time: Option<ClockTime>) -> String {
    time.map(|t| t.to_string()).unwrap_or_else(|| "-".to_string())
}

/// `date\tstart\tend\ttitle`, with empty fields for absent values.
fn quiet_line(result: &ExtractionResult) -> String {
    let field = |s: String| if s == "-" { String::new() } else { s };
    format!(
        "{}\t{}\t{}\t{}",
        field(date_cell(result)),
        field(time_cell(result.start_time)),
        field(time_cell(result.end_time)),
        result.title.as_deref().unwrap_or("")
    )
}

fn shorten(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or("");
    if first_line.chars().count() > MAX_TEXT_WIDTH || text.contains('\n') {
        let head: String = first_line.chars().take(MAX_TEXT_WIDTH).collect();
        format!("{}…", head)
    } else {
        first_line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use lichhen_domain::TimeRange;

    fn create_test_result() -> ExtractionResult {
        let start = ClockTime::new(9, 0).unwrap();
        ExtractionResult::new(
            NaiveDate::from_ymd_opt(2025, 12, 2),
            Some(TimeRange::one_hour_from(start)),
            Some("Họp lúc".to_string()),
        )
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_extraction(&create_test_result()).unwrap();
        assert!(output.contains("\"startTime\": \"09:00\""));
        assert!(output.contains("\"date\": \"2025-12-02\""));
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_extraction(&create_test_result()).unwrap();
        assert!(output.contains("Title"));
        assert!(output.contains("10:00"));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_extraction(&create_test_result()).unwrap();
        assert_eq!(output, "2025-12-02\t09:00\t10:00\tHọp lúc");

        let empty = formatter.format_extraction(&ExtractionResult::default()).unwrap();
        assert_eq!(empty, "\t\t\t");
    }

    #[test]
    fn test_batch_json_keeps_text() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let texts = vec!["Họp lúc 9h mai".to_string()];
        let output = formatter
            .format_extractions(&texts, &[create_test_result()])
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json[0]["text"], "Họp lúc 9h mai");
        assert_eq!(json[0]["details"]["endTime"], "10:00");
    }

    #[test]
    fn test_empty_batch_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_extractions(&[], &[]).unwrap();
        assert!(output.contains("No texts given"));
    }

    #[test]
    fn test_prediction_without_details() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let prediction = Prediction {
            is_appointment: false,
            confidence: 0.12,
            details: None,
        };
        let output = formatter.format_prediction(&prediction).unwrap();
        assert_eq!(output, "⚠ Not an appointment (confidence 0.1200)");
    }

    #[test]
    fn test_shorten() {
        assert_eq!(shorten("ngắn"), "ngắn");
        assert_eq!(shorten("dòng 1\ndòng 2"), "dòng 1…");
        assert_eq!(shorten(&"a".repeat(50)).chars().count(), MAX_TEXT_WIDTH + 1);
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
    }
}
