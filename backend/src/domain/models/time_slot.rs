use serde::{Deserialize, Serialize};

use crate::domain::clock_time::{ClockTime, ClockTimeError};

/// One candidate appointment window on the target date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainTimeSlot {
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub is_available: bool,
}

impl DomainTimeSlot {
    pub fn duration_minutes(&self) -> i64 {
        self.end_time.minutes() - self.start_time.minutes()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    #[error("Invalid working-hours time: {0}")]
    Format(#[from] ClockTimeError),
    #[error("Service duration must be between 1 and 1440 minutes, got {0} minutes")]
    InvalidDuration(i64),
    #[error("Invalid booking timestamp: '{0}'")]
    InvalidTimestamp(String),
}
