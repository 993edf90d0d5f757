//! Clock time values

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A wall-clock time with minute precision
///
/// Displayed and serialized as zero-padded 24-hour `HH:MM`. Values built with
/// [`ClockTime::new`] always have `hour <= 23`. The only way to obtain hour 24
/// is [`ClockTime::next_hour`] on a 23:xx time, which keeps the literal value
/// instead of wrapping to the next day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Create a clock time, rejecting out-of-range components
    ///
    /// # Examples
    ///
    /// ```
    /// use lichhen_domain::ClockTime;
    ///
    /// assert_eq!(ClockTime::new(9, 5).unwrap().to_string(), "09:05");
    /// assert!(ClockTime::new(24, 0).is_none());
    /// assert!(ClockTime::new(7, 60).is_none());
    /// ```
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Create a clock time from constant components
    ///
    /// Intended for tables of fixed times; evaluating it in a `const` item
    /// turns an out-of-range value into a compile error.
    ///
    /// ```
    /// use lichhen_domain::ClockTime;
    ///
    /// const NOON: ClockTime = ClockTime::from_hm(12, 0);
    /// assert_eq!(NOON.to_string(), "12:00");
    /// ```
    pub const fn from_hm(hour: u8, minute: u8) -> Self {
        assert!(hour <= 23 && minute <= 59, "clock time out of range");
        Self { hour, minute }
    }

    /// The same minute one hour later, without wrapping past midnight
    ///
    /// ```
    /// use lichhen_domain::ClockTime;
    ///
    /// let late = ClockTime::new(23, 15).unwrap();
    /// assert_eq!(late.next_hour().to_string(), "24:15");
    /// ```
    pub fn next_hour(&self) -> Self {
        Self {
            hour: self.hour + 1,
            minute: self.minute,
        }
    }

    /// Hour component
    pub fn hour(&self) -> u32 {
        u32::from(self.hour)
    }

    /// Minute component
    pub fn minute(&self) -> u32 {
        u32::from(self.minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| format!("Invalid clock time '{}': expected HH:MM", s))?;
        let hour: u32 = hour
            .parse()
            .map_err(|e| format!("Invalid hour in '{}': {}", s, e))?;
        let minute: u32 = minute
            .parse()
            .map_err(|e| format!("Invalid minute in '{}': {}", s, e))?;

        // 24:MM is accepted back because next_hour can produce it
        if hour == 24 && minute <= 59 {
            return Ok(Self { hour: 24, minute: minute as u8 });
        }
        Self::new(hour, minute).ok_or_else(|| format!("Clock time out of range: '{}'", s))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A `(start, end)` pair of clock times
///
/// `end` is not guaranteed to be later than `start`: ranges are reported as
/// written in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    /// Start of the appointment
    pub start: ClockTime,
    /// End of the appointment
    pub end: ClockTime,
}

impl TimeRange {
    /// Create a range from two clock times
    pub const fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// A one-hour range starting at `start`
    pub fn one_hour_from(start: ClockTime) -> Self {
        Self {
            start,
            end: start.next_hour(),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
