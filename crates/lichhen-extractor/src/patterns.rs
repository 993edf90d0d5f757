//! Surface patterns and keyword tables shared by the parsers
//!
//! The date and time parsers match against these patterns, and the title
//! parser strips the same patterns so that scheduling noise never ends up in
//! a title.

use chrono::Weekday;

/// `day[/-]month[/-year]` as a standalone token
pub(crate) const NUMERIC_DATE: &str = r"\b(\d{1,2})[/-](\d{1,2})(?:[/-](\d{2,4}))?\b";

/// Hour markers accepted after a numeric hour
const HOUR_MARKER: &str = r"(?:h|giờ|gio|:)";

/// Two clock tokens joined by a connector: `7h30-9h`, `14h đến 16h30`
///
/// Groups: 1 start hour, 2 start marker, 3 start minute, 4 connector,
/// 5 end hour, 6 end marker, 7 end minute.
pub(crate) fn time_range_pattern() -> String {
    format!(
        r"\b(\d{{1,2}})(?:\s*({m})\s*(\d{{1,2}})?)?\s*(->|-|đến|den|to)\s*(\d{{1,2}})(?:\s*({m})\s*(\d{{1,2}})?)?\b",
        m = HOUR_MARKER
    )
}

/// True when `text[start..end]` is glued to a clock colon, like the `15-10`
/// inside `9:15-10:30`
pub(crate) fn touches_clock(text: &str, start: usize, end: usize) -> bool {
    text[..start].ends_with(':') || text[end..].starts_with(':')
}

/// One clock token with a unit marker: `9h`, `7 giờ 30`, `10:15`
///
/// Groups: 1 hour, 2 minute.
pub(crate) fn time_point_pattern() -> String {
    format!(r"\b(\d{{1,2}})\s*{}\s*(\d{{1,2}})?\b", HOUR_MARKER)
}

/// Relative day words and their offset from today, in priority order
pub(crate) const RELATIVE_DAYS: &[(&str, u64)] = &[
    ("hôm nay", 0),
    ("hom nay", 0),
    ("ngày mai", 1),
    ("ngay mai", 1),
    ("mai", 1),
    ("ngày kia", 2),
    ("ngay kia", 2),
];

/// Weekday tokens in lookup order
pub(crate) const WEEKDAY_NAMES: &[(&str, Weekday)] = &[
    ("thứ hai", Weekday::Mon),
    ("thứ 2", Weekday::Mon),
    ("thu hai", Weekday::Mon),
    ("thu 2", Weekday::Mon),
    ("t2", Weekday::Mon),
    ("thứ ba", Weekday::Tue),
    ("thứ 3", Weekday::Tue),
    ("thu ba", Weekday::Tue),
    ("thu 3", Weekday::Tue),
    ("t3", Weekday::Tue),
    ("thứ tư", Weekday::Wed),
    ("thứ 4", Weekday::Wed),
    ("thu tu", Weekday::Wed),
    ("thu 4", Weekday::Wed),
    ("t4", Weekday::Wed),
    ("thứ năm", Weekday::Thu),
    ("thứ 5", Weekday::Thu),
    ("thu nam", Weekday::Thu),
    ("thu 5", Weekday::Thu),
    ("t5", Weekday::Thu),
    ("thứ sáu", Weekday::Fri),
    ("thứ 6", Weekday::Fri),
    ("thu sau", Weekday::Fri),
    ("thu 6", Weekday::Fri),
    ("t6", Weekday::Fri),
    ("thứ bảy", Weekday::Sat),
    ("thứ 7", Weekday::Sat),
    ("thu bay", Weekday::Sat),
    ("thu 7", Weekday::Sat),
    ("t7", Weekday::Sat),
    ("chủ nhật", Weekday::Sun),
    ("chu nhat", Weekday::Sun),
    ("cn", Weekday::Sun),
];

/// Whole-word pattern for a keyword, tolerant of spacing between its words
pub(crate) fn keyword_pattern(keyword: &str) -> String {
    let words: Vec<String> = keyword.split_whitespace().map(regex::escape).collect();
    format!(r"\b{}\b", words.join(r"\s*"))
}

/// Whole-word alternation over several keywords, longest first
pub(crate) fn any_keyword_pattern<'a>(keywords: impl IntoIterator<Item = &'a str>) -> String {
    let mut keywords: Vec<&str> = keywords.into_iter().collect();
    keywords.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    keywords.dedup();
    let alternatives: Vec<String> = keywords
        .iter()
        .map(|k| {
            let words: Vec<String> = k.split_whitespace().map(regex::escape).collect();
            words.join(r"\s*")
        })
        .collect();
    format!(r"\b(?:{})\b", alternatives.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_keyword_pattern_whole_word() {
        let re = Regex::new(&keyword_pattern("mai")).unwrap();
        assert!(re.is_match("họp mai nhé"));
        assert!(re.is_match("mai"));
        assert!(!re.is_match("gửi email"));
    }

    #[test]
    fn test_keyword_pattern_spacing() {
        let re = Regex::new(&keyword_pattern("thứ 2")).unwrap();
        assert!(re.is_match("thứ 2"));
        assert!(re.is_match("thứ2"));
        assert!(re.is_match("thứ   2"));
        assert!(!re.is_match("thứ 25"));
    }

    #[test]
    fn test_any_keyword_prefers_longest() {
        let re = Regex::new(&any_keyword_pattern(["mai", "ngày mai"])).unwrap();
        let m = re.find("hẹn ngày mai").unwrap();
        assert_eq!(m.as_str(), "ngày mai");
    }

    #[test]
    fn test_all_patterns_compile() {
        assert!(Regex::new(NUMERIC_DATE).is_ok());
        assert!(Regex::new(&time_range_pattern()).is_ok());
        assert!(Regex::new(&time_point_pattern()).is_ok());
        for (name, _) in WEEKDAY_NAMES {
            assert!(Regex::new(&keyword_pattern(name)).is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_date_inside_clock_range_touches_clock() {
        let text = "họp 9:15-10:30";
        let re = Regex::new(NUMERIC_DATE).unwrap();
        let m = re.find(text).unwrap();
        assert_eq!(m.as_str(), "15-10");
        assert!(touches_clock(text, m.start(), m.end()));

        let text = "nộp 23/12";
        let m = re.find(text).unwrap();
        assert!(!touches_clock(text, m.start(), m.end()));
    }

    #[test]
    fn test_weekday_table_covers_every_day() {
        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            assert!(WEEKDAY_NAMES.iter().any(|(_, d)| *d == day));
        }
    }
}
