//! Title derivation
//!
//! The title is built from the first line only. Date and time expressions are
//! stripped with the same surface patterns the date and time parsers match,
//! then the line is labelled by its first known verb. Output is stable: feeding
//! a produced title back in returns it unchanged.

use crate::error::ExtractorError;
use crate::patterns::{
    any_keyword_pattern, time_point_pattern, time_range_pattern, touches_clock, NUMERIC_DATE,
    RELATIVE_DAYS, WEEKDAY_NAMES,
};
use regex::{Captures, Regex};
use tracing::debug;

/// Appointment verbs in lookup order
const VERBS: &[&str] = &[
    "họp",
    "gặp",
    "đi",
    "tham gia",
    "học",
    "khám",
    "nộp",
    "làm việc",
    "phỏng vấn",
    "kiểm tra",
    "báo cáo",
];

/// "arrive at / go to"
const ARRIVE: &str = "đến";
const ARRIVE_PREFIX: &str = "Đến";

/// Prefix used when no verb or destination is found
const ATTEND_PREFIX: &str = "Tham gia";

/// Derives a short label for an appointment
#[derive(Debug, Clone)]
pub struct TitleParser {
    clock: Vec<Regex>,
    date: Regex,
    keywords: Vec<Regex>,
    placeholder: String,
}

impl TitleParser {
    /// Compile the cleanup patterns
    ///
    /// `placeholder` is returned when nothing is left of the first line.
    pub fn new(placeholder: impl Into<String>) -> Result<Self, ExtractorError> {
        // Ranges before points so `7h-9h` goes as one piece.
        let clock = [time_range_pattern(), time_point_pattern()]
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;
        let keywords = [
            any_keyword_pattern(RELATIVE_DAYS.iter().map(|(word, _)| *word)),
            any_keyword_pattern(WEEKDAY_NAMES.iter().map(|(name, _)| *name)),
        ]
        .iter()
        .map(|pattern| Regex::new(pattern))
        .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            clock,
            date: Regex::new(NUMERIC_DATE)?,
            keywords,
            placeholder: placeholder.into(),
        })
    }

    /// Derive a title; never returns an empty string
    pub fn extract_title(&self, text: &str) -> String {
        let line = self.clean_first_line(text);

        // The placeholder fed back in must come out as itself, not "Tham gia ..."
        if line.is_empty() || line == self.placeholder.to_lowercase() {
            return self.placeholder.clone();
        }

        // Pad so that a verb opening the line and one inside it look alike.
        let padded = format!(" {} ", line);

        for verb in VERBS {
            if let Some(object) = phrase_after(&padded, verb) {
                debug!(verb = *verb, "title verb matched");
                return format!("{} {}", capitalize(verb), object).trim_end().to_string();
            }
        }

        if let Some(place) = phrase_after(&padded, ARRIVE).filter(|p| !p.is_empty()) {
            debug!("title destination matched");
            return format!("{} {}", ARRIVE_PREFIX, capitalize(place));
        }

        format!("{} {}", ATTEND_PREFIX, line)
    }

    /// First non-blank line, lowercased, with scheduling noise removed
    ///
    /// Stripping repeats until nothing changes: removing one token can join
    /// its neighbours into a new one (`9 mai giờ` becomes `9 giờ`).
    fn clean_first_line(&self, text: &str) -> String {
        let mut line = collapse(&text.trim().lines().next().unwrap_or_default().to_lowercase());
        loop {
            let stripped = collapse(&self.strip_noise(&line));
            if stripped == line {
                return line;
            }
            line = stripped;
        }
    }

    fn strip_noise(&self, line: &str) -> String {
        let mut line = line.to_string();
        for re in &self.clock {
            line = re.replace_all(&line, " ").into_owned();
        }

        let dated = self
            .date
            .replace_all(&line, |caps: &Captures<'_>| match caps.get(0) {
                Some(m) if touches_clock(&line, m.start(), m.end()) => m.as_str().to_string(),
                _ => " ".to_string(),
            })
            .into_owned();
        line = dated;

        for re in &self.keywords {
            line = re.replace_all(&line, " ").into_owned();
        }
        line
    }
}

fn collapse(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text following the first standalone occurrence of `word` in a space-padded line
fn phrase_after<'a>(padded: &'a str, word: &str) -> Option<&'a str> {
    let needle = format!(" {} ", word);
    let pos = padded.find(&needle)?;
    Some(padded[pos + needle.len()..].trim())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
