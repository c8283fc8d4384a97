//! Clock-time arithmetic for working hours and slots.
//!
//! Working hours are weekday-relative, so they are kept as a time of day
//! rather than a full date-time. A [`ClockTime`] is a count of minutes since
//! midnight in `[0, 1440)` and renders as a zero-padded 24-hour `HH:MM`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockTimeError {
    #[error("'{0}' is not a valid HH:MM clock time")]
    Malformed(String),
    #[error("'{0}' is out of range (hours 00-23, minutes 00-59)")]
    OutOfRange(String),
}

/// Time of day with minute precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Build from minutes since midnight, wrapping into a single day
    pub fn from_minutes(minutes: i64) -> Self {
        ClockTime(minutes.rem_euclid(MINUTES_PER_DAY) as u16)
    }

    /// Const constructor for fixed times; invalid input fails const evaluation
    pub const fn at(hours: u16, minutes: u16) -> Self {
        assert!(hours < 24 && minutes < 60);
        ClockTime(hours * 60 + minutes)
    }

    pub fn from_hm(hours: u16, minutes: u16) -> Option<Self> {
        if hours < 24 && minutes < 60 {
            Some(ClockTime(hours * 60 + minutes))
        } else {
            None
        }
    }

    pub fn minutes(&self) -> i64 {
        i64::from(self.0)
    }

    pub fn hours_part(&self) -> u16 {
        self.0 / 60
    }

    pub fn minutes_part(&self) -> u16 {
        self.0 % 60
    }
}

/// Parse a strict `HH:MM` string into minutes since midnight.
///
/// Both fields must be exactly two ASCII digits; `9:00` and `09:0` are rejected.
pub fn parse_clock_time(s: &str) -> Result<i64, ClockTimeError> {
    s.parse::<ClockTime>().map(|t| t.minutes())
}

/// Format minutes since midnight (taken modulo one day) as `HH:MM`
pub fn format_clock_time(minutes: i64) -> String {
    ClockTime::from_minutes(minutes).to_string()
}

impl FromStr for ClockTime {
    type Err = ClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hours, minutes) = s
            .split_once(':')
            .ok_or_else(|| ClockTimeError::Malformed(s.to_string()))?;

        let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
        if !two_digits(hours) || !two_digits(minutes) {
            return Err(ClockTimeError::Malformed(s.to_string()));
        }

        let hours: u16 = hours
            .parse()
            .map_err(|_| ClockTimeError::Malformed(s.to_string()))?;
        let minutes: u16 = minutes
            .parse()
            .map_err(|_| ClockTimeError::Malformed(s.to_string()))?;

        ClockTime::from_hm(hours, minutes).ok_or_else(|| ClockTimeError::OutOfRange(s.to_string()))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours_part(), self.minutes_part())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
