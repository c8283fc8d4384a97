//! Appointment time-slot generation.
//!
//! Turns working periods and existing bookings into the ordered list of
//! fixed-length candidate slots for one date. Candidate starts step by
//! [`SLOT_INTERVAL_MINUTES`] regardless of service length, a slot is only
//! emitted when it ends by closing time, and each emitted slot is available
//! when it collides with no active booking and starts strictly after `now`.
//!
//! Periods are processed in the order given and are not merged, so
//! overlapping periods can produce repeated slots.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::domain::clock_time::{ClockTime, MINUTES_PER_DAY};
use crate::domain::conflict::has_conflict;
use crate::domain::models::booking::ExistingBooking;
use crate::domain::models::time_slot::{DomainTimeSlot, SlotError};
use crate::domain::models::working_period::WorkingPeriod;

/// Step between successive candidate start times
pub const SLOT_INTERVAL_MINUTES: i64 = 30;

/// Used only when the caller gives no duration at all
pub const DEFAULT_SERVICE_DURATION_MINUTES: i64 = 60;

/// Stateless slot generator
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotGenerator;

impl SlotGenerator {
    pub fn new() -> Self {
        Self
    }

    /// `None` falls back to the 60 minute default. An explicit value must be
    /// positive and no longer than a day, since nothing longer can fit.
    pub fn resolve_duration(duration_minutes: Option<i64>) -> Result<i64, SlotError> {
        match duration_minutes {
            None => Ok(DEFAULT_SERVICE_DURATION_MINUTES),
            Some(minutes) if (1..=MINUTES_PER_DAY).contains(&minutes) => Ok(minutes),
            Some(minutes) => Err(SlotError::InvalidDuration(minutes)),
        }
    }

    /// Enumerate the candidate slots for `date` across every active period.
    ///
    /// No active periods is not an error: the day simply has no slots.
    pub fn generate_time_slots(
        &self,
        periods: &[WorkingPeriod],
        bookings: &[ExistingBooking],
        date: NaiveDate,
        duration_minutes: Option<i64>,
        now: NaiveDateTime,
    ) -> Result<Vec<DomainTimeSlot>, SlotError> {
        let duration = Self::resolve_duration(duration_minutes)?;

        let mut slots = Vec::new();
        for period in periods.iter().filter(|p| p.is_active) {
            let period_start = period.start_time.minutes();
            let period_end = period.end_time.minutes();

            let mut cursor = period_start;
            while cursor < period_end {
                // later starts only end later
                let slot_end = match cursor.checked_add(duration) {
                    Some(end) if end <= period_end => end,
                    _ => break,
                };

                let is_available =
                    !has_conflict(cursor, slot_end, bookings, date) && Self::is_slot_in_future(date, cursor, now);

                slots.push(DomainTimeSlot {
                    start_time: ClockTime::from_minutes(cursor),
                    end_time: ClockTime::from_minutes(slot_end),
                    is_available,
                });

                cursor += SLOT_INTERVAL_MINUTES;
            }
        }

        debug!(
            "Generated {} slots for {} ({} min, {} periods, {} bookings)",
            slots.len(),
            date,
            duration,
            periods.len(),
            bookings.len()
        );

        Ok(slots)
    }

    /// Slots for the synthetic 09:00-20:00 day, ignoring bookings.
    /// Deciding when a barber has "no schedule" is up to the caller.
    pub fn generate_default_time_slots(
        &self,
        date: NaiveDate,
        duration_minutes: Option<i64>,
        now: NaiveDateTime,
    ) -> Result<Vec<DomainTimeSlot>, SlotError> {
        self.generate_time_slots(
            &[WorkingPeriod::default_business_hours()],
            &[],
            date,
            duration_minutes,
            now,
        )
    }

    /// Strictly after `now`; a slot starting exactly now is already gone
    pub fn is_slot_in_future(date: NaiveDate, start_minutes: i64, now: NaiveDateTime) -> bool {
        let slot_start = date.and_time(NaiveTime::MIN) + Duration::minutes(start_minutes);
        slot_start > now
    }
}
