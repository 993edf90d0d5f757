//! Clock-time range extraction
//!
//! Rules, first match wins:
//!
//! 1. a numeric range (`7h30-9h`, `14h đến 16h30`)
//! 2. a single numeric time (`9h`, `7 giờ 30`, `10:15`), given a one-hour
//!    implicit duration
//! 3. a named part of the day (`sáng`, `chiều`, ...), used only when no
//!    numeric time appears anywhere in the text

use crate::error::ExtractorError;
use crate::patterns::{keyword_pattern, time_point_pattern, time_range_pattern};
use lichhen_domain::{ClockTime, TimeRange};
use regex::{Captures, Regex};
use tracing::debug;

type TimeRule = fn(&TimeParser, &str) -> Option<TimeRange>;

/// Time rules in priority order
const TIME_RULES: &[(&str, TimeRule)] = &[
    ("range", TimeParser::range),
    ("point", TimeParser::point),
    ("period", TimeParser::period),
];

/// Named segment of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    /// sáng
    Morning,
    /// trưa
    Noon,
    /// chiều
    Afternoon,
    /// tối
    Evening,
    /// đêm
    Night,
}

impl DayPeriod {
    /// Canonical clock interval for the period
    pub fn interval(&self) -> TimeRange {
        match self {
            DayPeriod::Morning => TimeRange::new(ClockTime::from_hm(8, 0), ClockTime::from_hm(12, 0)),
            DayPeriod::Noon => TimeRange::new(ClockTime::from_hm(12, 0), ClockTime::from_hm(13, 30)),
            DayPeriod::Afternoon => TimeRange::new(ClockTime::from_hm(13, 30), ClockTime::from_hm(18, 0)),
            DayPeriod::Evening => TimeRange::new(ClockTime::from_hm(18, 0), ClockTime::from_hm(22, 0)),
            DayPeriod::Night => TimeRange::new(ClockTime::from_hm(22, 0), ClockTime::from_hm(23, 59)),
        }
    }
}

/// Day-period words in lookup order
const DAY_PERIODS: &[(&str, DayPeriod)] = &[
    ("sáng", DayPeriod::Morning),
    ("sang", DayPeriod::Morning),
    ("trưa", DayPeriod::Noon),
    ("trua", DayPeriod::Noon),
    ("chiều", DayPeriod::Afternoon),
    ("chieu", DayPeriod::Afternoon),
    ("tối", DayPeriod::Evening),
    ("toi", DayPeriod::Evening),
    ("đêm", DayPeriod::Night),
    ("dem", DayPeriod::Night),
];

/// Extracts a `(start, end)` clock-time range from text
#[derive(Debug, Clone)]
pub struct TimeParser {
    range: Regex,
    point: Regex,
    periods: Vec<(Regex, DayPeriod)>,
}

impl TimeParser {
    /// Compile the time patterns and the day-period table
    pub fn new() -> Result<Self, ExtractorError> {
        let periods = DAY_PERIODS
            .iter()
            .map(|(word, period)| Ok((Regex::new(&keyword_pattern(word))?, *period)))
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self {
            range: Regex::new(&time_range_pattern())?,
            point: Regex::new(&time_point_pattern())?,
            periods,
        })
    }

    /// Extract a time range from text
    pub fn extract_time(&self, text: &str) -> Option<TimeRange> {
        let lowered = text.to_lowercase();
        TIME_RULES.iter().find_map(|(name, rule)| {
            let range = rule(self, &lowered)?;
            debug!(rule = *name, %range, "time rule matched");
            Some(range)
        })
    }

    fn range(&self, text: &str) -> Option<TimeRange> {
        self.range.captures_iter(text).find_map(|caps| {
            // A bare `23-12` is a date; a dash range needs a unit marker.
            let dashed = caps.get(4).is_some_and(|c| c.as_str() == "-");
            if dashed && caps.get(2).is_none() && caps.get(6).is_none() {
                return None;
            }
            let start = clock_from(&caps, 1, 3)?;
            let end = clock_from(&caps, 5, 7)?;
            Some(TimeRange::new(start, end))
        })
    }

    fn point(&self, text: &str) -> Option<TimeRange> {
        self.point
            .captures_iter(text)
            .find_map(|caps| clock_from(&caps, 1, 2))
            .map(TimeRange::one_hour_from)
    }

    fn period(&self, text: &str) -> Option<TimeRange> {
        self.periods
            .iter()
            .find(|(re, _)| re.is_match(text))
            .map(|(_, period)| period.interval())
    }
}

/// Build a clock time from an hour group and an optional minute group
fn clock_from(caps: &Captures<'_>, hour_group: usize, minute_group: usize) -> Option<ClockTime> {
    let hour: u32 = caps.get(hour_group)?.as_str().parse().ok()?;
    let minute: u32 = match caps.get(minute_group) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    ClockTime::new(hour, minute)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> TimeParser {
        TimeParser::new().unwrap()
    }

    fn times(text: &str) -> Option<(String, String)> {
        parser()
            .extract_time(text)
            .map(|r| (r.start.to_string(), r.end.to_string()))
    }

    fn pair(start: &str, end: &str) -> Option<(String, String)> {
        Some((start.to_string(), end.to_string()))
    }

    #[test]
    fn test_range_with_textual_connector() {
        assert_eq!(times("Họp 23/12/2025 từ 14h đến 16h30"), pair("14:00", "16:30"));
        assert_eq!(times("tu 9 gio den 11 gio"), pair("09:00", "11:00"));
        assert_eq!(times("họp từ 9 đến 11 ngày mai"), pair("09:00", "11:00"));
    }

    #[test]
    fn test_range_with_symbol_connector() {
        assert_eq!(times("học 7h30-9h"), pair("07:30", "09:00"));
        assert_eq!(times("ca trực 13:00 -> 17:30"), pair("13:00", "17:30"));
        assert_eq!(times("meeting 9h to 10h"), pair("09:00", "10:00"));
        assert_eq!(times("làm việc 14-16h"), pair("14:00", "16:00"));
    }

    #[test]
    fn test_bare_date_is_not_a_range() {
        assert_eq!(times("nộp hồ sơ 23-12"), None);
        assert_eq!(times("nộp hồ sơ 23-12 lúc 9h"), pair("09:00", "10:00"));
    }

    #[test]
    fn test_clock_minutes_in_range() {
        assert_eq!(times("Họp 9:15-10:30 thứ 6"), pair("09:15", "10:30"));
        assert_eq!(times("Họp 10:30-11:30 với khách"), pair("10:30", "11:30"));
    }

    #[test]
    fn test_single_point() {
        assert_eq!(times("Họp lúc 9h mai"), pair("09:00", "10:00"));
        assert_eq!(times("khám 7 giờ 30"), pair("07:30", "08:30"));
        assert_eq!(times("gọi lại lúc 10:15"), pair("10:15", "11:15"));
    }

    #[test]
    fn test_single_point_keeps_literal_hour_past_23() {
        assert_eq!(times("trực đêm 23h"), pair("23:00", "24:00"));
    }

    #[test]
    fn test_unit_marker_must_not_start_a_word() {
        // "9 học sinh" is a head count, not 9 o'clock
        assert_eq!(times("lớp có 9 học sinh"), None);
    }

    #[test]
    fn test_out_of_range_token_is_skipped() {
        assert_eq!(times("mã 99h rồi họp 8h"), pair("08:00", "09:00"));
        assert_eq!(times("25h"), None);
    }

    #[test]
    fn test_numeric_time_beats_period() {
        assert_eq!(times("sáng 9h"), pair("09:00", "10:00"));
    }

    #[test]
    fn test_day_periods() {
        assert_eq!(times("Khám bệnh thứ 3 tuần sau buổi sáng"), pair("08:00", "12:00"));
        assert_eq!(times("ăn trưa cùng team"), pair("12:00", "13:30"));
        assert_eq!(times("chieu nay hop"), pair("13:30", "18:00"));
        assert_eq!(times("tối thứ 6 đi xem phim"), pair("18:00", "22:00"));
        assert_eq!(times("trực đêm"), pair("22:00", "23:59"));
    }

    #[test]
    fn test_no_time() {
        assert_eq!(times("gặp khách hàng trao đổi dự án"), None);
        assert_eq!(times("Gặp đối tác"), None);
    }
}
