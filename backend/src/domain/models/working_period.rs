use serde::{Deserialize, Serialize};
use shared::DayOfWeek;

use crate::domain::clock_time::ClockTime;
use crate::domain::models::time_slot::SlotError;

/// Opening of the default business day used when no schedule is on file
pub const DEFAULT_OPENING: ClockTime = ClockTime::at(9, 0);
/// Closing of the default business day used when no schedule is on file
pub const DEFAULT_CLOSING: ClockTime = ClockTime::at(20, 0);

/// One open interval of availability on a day, validated at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingPeriod {
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub is_active: bool,
}

impl WorkingPeriod {
    pub fn new(start_time: ClockTime, end_time: ClockTime, is_active: bool) -> Self {
        Self {
            start_time,
            end_time,
            is_active,
        }
    }

    /// Build from raw `HH:MM` strings. Malformed times fail with [`SlotError::Format`],
    /// regardless of whether the period is active.
    pub fn parse(start_time: &str, end_time: &str, is_active: bool) -> Result<Self, SlotError> {
        Ok(Self {
            start_time: start_time.parse()?,
            end_time: end_time.parse()?,
            is_active,
        })
    }

    /// The synthetic 09:00-20:00 active period
    pub fn default_business_hours() -> Self {
        Self::new(DEFAULT_OPENING, DEFAULT_CLOSING, true)
    }

    pub fn length_minutes(&self) -> i64 {
        (self.end_time.minutes() - self.start_time.minutes()).max(0)
    }
}

/// A stored working-hours record: a period bound to a weekday
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainWorkingHours {
    pub id: String,
    pub day_of_week: DayOfWeek,
    pub period: WorkingPeriod,
}

impl DomainWorkingHours {
    pub fn applies_to(&self, day: DayOfWeek) -> bool {
        self.day_of_week == day
    }
}
