use chrono::{DateTime, NaiveDate, NaiveDateTime};
use shared::BookingStatus;

use crate::domain::models::time_slot::SlotError;

/// A previously made reservation, reduced to what slot generation needs.
/// Times are wall-clock times in the shop's local time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingBooking {
    pub id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub status: BookingStatus,
    pub service_id: Option<String>,
}

impl ExistingBooking {
    pub fn new(id: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime, status: BookingStatus) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            status,
            service_id: None,
        }
    }

    /// Calendar day the booking belongs to, taken from its start
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn occupies_time(&self) -> bool {
        self.status.occupies_time()
    }
}

/// Parse a booking timestamp.
///
/// RFC 3339 input keeps the wall-clock time of its own offset, so
/// `2025-06-16T09:30:00-04:00` is 09:30 on June 16. Naive
/// `YYYY-MM-DDTHH:MM[:SS]` input is taken as shop-local already.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, SlotError> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Ok(with_offset.naive_local());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .ok_or_else(|| SlotError::InvalidTimestamp(raw.to_string()))
}

/// Format a wall-clock timestamp the way it is written to storage and the wire
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S").to_string()
}
