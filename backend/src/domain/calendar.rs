//! Calendar domain logic for the booking flow.
//!
//! Weekday lookups, human-readable date formatting, the current-date summary
//! and stepping the selected booking date. Everything takes "today" or "now"
//! as an argument so the wall clock is read only at the service edge.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use shared::{CurrentDateResponse, DateStep, DayOfWeek};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Calendar service that handles date-related business logic
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    pub fn day_of_week(&self, date: NaiveDate) -> DayOfWeek {
        DayOfWeek::from(date.weekday())
    }

    /// Get the human-readable name for a month number
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January", 2 => "February", 3 => "March", 4 => "April",
            5 => "May", 6 => "June", 7 => "July", 8 => "August",
            9 => "September", 10 => "October", 11 => "November", 12 => "December",
            _ => "Invalid Month",
        }
    }

    /// "Monday, June 16, 2025"
    pub fn format_date_for_display(&self, date: NaiveDate) -> String {
        format!(
            "{}, {} {}, {}",
            self.day_of_week(date).day_name(),
            self.month_name(date.month()),
            date.day(),
            date.year()
        )
    }

    pub fn format_iso_date(&self, date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    pub fn parse_iso_date(&self, raw: &str) -> Result<NaiveDate, CalendarError> {
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| CalendarError::InvalidDate(raw.to_string()))
    }

    /// Get current date information
    pub fn get_current_date(&self, now: NaiveDateTime) -> CurrentDateResponse {
        let today = now.date();
        CurrentDateResponse {
            month: today.month(),
            year: today.year(),
            day: today.day(),
            day_of_week: self.day_of_week(today),
            formatted_date: self.format_date_for_display(today),
            iso_date: self.format_iso_date(today),
        }
    }

    /// Move the selected booking date by one day.
    ///
    /// Returns the new date and whether it changed. Stepping back never goes
    /// before `today`; a selection already in the past is pulled forward to
    /// `today` by either step.
    pub fn step_selected_date(&self, current: NaiveDate, step: DateStep, today: NaiveDate) -> (NaiveDate, bool) {
        let candidate = match step {
            DateStep::Previous => current - Duration::days(1),
            DateStep::Next => current + Duration::days(1),
        };
        let next = candidate.max(today);
        (next, next != current)
    }
}
