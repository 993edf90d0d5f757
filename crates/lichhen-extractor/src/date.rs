//! Calendar date extraction
//!
//! Three rules are tried in a fixed order and the first one that produces a
//! date wins:
//!
//! 1. an explicit numeric date (`23/12`, `23-12-25`, `23/12/2025`)
//! 2. a relative day word (`hôm nay`, `mai`, `ngày kia`)
//! 3. a weekday name (`thứ 3`, `t6`, `chủ nhật`), resolved to its next
//!    occurrence strictly after today
//!
//! A rule that cannot produce a valid date reports no match, and evaluation
//! moves on to the next rule.

use crate::error::ExtractorError;
use crate::patterns::{keyword_pattern, touches_clock, NUMERIC_DATE, RELATIVE_DAYS, WEEKDAY_NAMES};
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use regex::Regex;
use tracing::debug;

type DateRule = fn(&DateParser, &str, NaiveDate) -> Option<NaiveDate>;

/// Date rules in priority order
const DATE_RULES: &[(&str, DateRule)] = &[
    ("numeric", DateParser::numeric_date),
    ("relative", DateParser::relative_day),
    ("weekday", DateParser::weekday),
];

/// Extracts a single calendar date from text
#[derive(Debug, Clone)]
pub struct DateParser {
    numeric: Regex,
    relative: Vec<(Regex, u64)>,
    weekdays: Vec<(Regex, Weekday)>,
}

impl DateParser {
    /// Compile the date patterns and keyword tables
    pub fn new() -> Result<Self, ExtractorError> {
        let relative = RELATIVE_DAYS
            .iter()
            .map(|(word, offset)| Ok((Regex::new(&keyword_pattern(word))?, *offset)))
            .collect::<Result<Vec<_>, regex::Error>>()?;

        let weekdays = WEEKDAY_NAMES
            .iter()
            .map(|(name, day)| Ok((Regex::new(&keyword_pattern(name))?, *day)))
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self {
            numeric: Regex::new(NUMERIC_DATE)?,
            relative,
            weekdays,
        })
    }

    /// Extract a date, resolving relative words against the local date
    pub fn extract_date(&self, text: &str) -> Option<NaiveDate> {
        self.extract_date_on(text, Local::now().date_naive())
    }

    /// Extract a date, resolving relative words against `today`
    pub fn extract_date_on(&self, text: &str, today: NaiveDate) -> Option<NaiveDate> {
        let lowered = text.to_lowercase();
        DATE_RULES.iter().find_map(|(name, rule)| {
            let date = rule(self, &lowered, today)?;
            debug!(rule = *name, %date, "date rule matched");
            Some(date)
        })
    }

    /// `day[/-]month[/-year]`; only the first token in the text is considered
    fn numeric_date(&self, text: &str, today: NaiveDate) -> Option<NaiveDate> {
        // `15-10` in `9:15-10:30` is clock digits, not a date
        let caps = self.numeric.captures_iter(text).find(|caps| {
            caps.get(0)
                .is_some_and(|m| !touches_clock(text, m.start(), m.end()))
        })?;
        let day: u32 = caps.get(1)?.as_str().parse().ok()?;
        let month: u32 = caps.get(2)?.as_str().parse().ok()?;
        let year: i32 = match caps.get(3).map(|m| m.as_str()) {
            Some(short) if short.len() == 2 => format!("20{}", short).parse().ok()?,
            Some(full) => full.parse().ok()?,
            None => today.year(),
        };

        let date = NaiveDate::from_ymd_opt(year, month, day);
        if date.is_none() {
            debug!(day, month, year, "numeric date is not on the calendar, falling through");
        }
        date
    }

    fn relative_day(&self, text: &str, today: NaiveDate) -> Option<NaiveDate> {
        let offset = self
            .relative
            .iter()
            .find(|(re, _)| re.is_match(text))
            .map(|(_, offset)| *offset)?;
        today.checked_add_days(Days::new(offset))
    }

    fn weekday(&self, text: &str, today: NaiveDate) -> Option<NaiveDate> {
        let target = self
            .weekdays
            .iter()
            .find(|(re, _)| re.is_match(text))
            .map(|(_, day)| *day)?;
        next_weekday(today, target)
    }
}

/// Next date falling on `target`, always 1 to 7 days after `today`
pub fn next_weekday(today: NaiveDate, target: Weekday) -> Option<NaiveDate> {
    let mut offset = i64::from(target.num_days_from_monday())
        - i64::from(today.weekday().num_days_from_monday());
    if offset <= 0 {
        offset += 7;
    }
    today.checked_add_days(Days::new(offset as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Monday
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn parser() -> DateParser {
        DateParser::new().unwrap()
    }

    #[test]
    fn test_numeric_date_with_full_year() {
        let date = parser().extract_date_on("Họp 23/12/2025 từ 14h", today());
        assert_eq!(date, Some(ymd(2025, 12, 23)));
    }

    #[test]
    fn test_numeric_date_without_year_uses_current_year() {
        let date = parser().extract_date_on("nộp báo cáo 5-1", today());
        assert_eq!(date, Some(ymd(2025, 1, 5)));
    }

    #[test]
    fn test_two_digit_year_is_expanded() {
        let date = parser().extract_date_on("hẹn 02/03/26", today());
        assert_eq!(date, Some(ymd(2026, 3, 2)));
    }

    #[test]
    fn test_invalid_numeric_date_falls_through() {
        let p = parser();
        assert_eq!(p.extract_date_on("họp 31/04", today()), None);
        assert_eq!(p.extract_date_on("họp 31/04 hoặc mai", today()), Some(ymd(2025, 12, 2)));
        assert_eq!(p.extract_date_on("30/02 thứ 6", today()), Some(ymd(2025, 12, 5)));
    }

    #[test]
    fn test_time_range_is_not_a_date() {
        assert_eq!(parser().extract_date_on("họp 14-16h", today()), None);
    }

    #[test]
    fn test_clock_minutes_are_not_a_date() {
        let p = parser();
        assert_eq!(p.extract_date_on("họp 9:15-10:30 thứ 6", today()), Some(ymd(2025, 12, 5)));
        assert_eq!(p.extract_date_on("họp 10:30-11:30 với khách", today()), None);
        assert_eq!(p.extract_date_on("họp 9:15-10:30 ngày 23/12", today()), Some(ymd(2025, 12, 23)));
    }

    #[test]
    fn test_relative_days() {
        let p = parser();
        assert_eq!(p.extract_date_on("Hôm nay đi khám", today()), Some(today()));
        assert_eq!(p.extract_date_on("hom nay di kham", today()), Some(today()));
        assert_eq!(p.extract_date_on("ngày mai họp", today()), Some(ymd(2025, 12, 2)));
        assert_eq!(p.extract_date_on("Họp lúc 9h mai", today()), Some(ymd(2025, 12, 2)));
        assert_eq!(p.extract_date_on("ngay kia gap nhe", today()), Some(ymd(2025, 12, 3)));
    }

    #[test]
    fn test_mai_inside_a_word_is_ignored() {
        assert_eq!(parser().extract_date_on("gửi email cho sếp", today()), None);
    }

    #[test]
    fn test_relative_beats_weekday() {
        let date = parser().extract_date_on("thứ 5 hay mai cũng được", today());
        assert_eq!(date, Some(ymd(2025, 12, 2)));
    }

    #[test]
    fn test_weekday_names() {
        let p = parser();
        assert_eq!(p.extract_date_on("Khám bệnh thứ 3 tuần sau", today()), Some(ymd(2025, 12, 2)));
        assert_eq!(p.extract_date_on("họp t6", today()), Some(ymd(2025, 12, 5)));
        assert_eq!(p.extract_date_on("đi chơi chủ nhật", today()), Some(ymd(2025, 12, 7)));
        assert_eq!(p.extract_date_on("di choi chu nhat", today()), Some(ymd(2025, 12, 7)));
        assert_eq!(p.extract_date_on("Thứ Tư học nhóm", today()), Some(ymd(2025, 12, 3)));
    }

    #[test]
    fn test_same_weekday_resolves_to_next_week() {
        let date = parser().extract_date_on("họp thứ hai", today());
        assert_eq!(date, Some(ymd(2025, 12, 8)));
    }

    #[test]
    fn test_no_date() {
        assert_eq!(parser().extract_date_on("gặp khách hàng trao đổi dự án", today()), None);
    }

    proptest! {
        #[test]
        fn prop_yearless_date_is_current_year_or_rejected(day in 1u32..=31, month in 1u32..=12) {
            let text = format!("họp {}/{}", day, month);
            let date = parser().extract_date_on(&text, today());
            prop_assert_eq!(date, NaiveDate::from_ymd_opt(2025, month, day));
        }

        #[test]
        fn prop_weekday_is_one_to_seven_days_ahead(
            offset in 0u64..3650,
            index in 0usize..WEEKDAY_NAMES.len(),
        ) {
            let base = ymd(2020, 1, 1).checked_add_days(Days::new(offset)).unwrap();
            let (name, expected_day) = WEEKDAY_NAMES[index];
            let date = parser().extract_date_on(&format!("gặp {}", name), base).unwrap();

            let ahead = (date - base).num_days();
            prop_assert!((1..=7).contains(&ahead));
            prop_assert_eq!(date.weekday(), expected_day);
        }
    }
}
