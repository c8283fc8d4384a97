//! Overlap detection between a candidate slot and existing bookings.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::domain::models::booking::ExistingBooking;

/// Minutes from midnight of `date` to `timestamp`.
///
/// Not wrapped: a booking ending at 00:30 the next day yields 1470, so
/// bookings running past midnight still block the evening.
pub fn minutes_since_midnight(timestamp: &NaiveDateTime, date: NaiveDate) -> i64 {
    (*timestamp - date.and_time(NaiveTime::MIN)).num_minutes()
}

/// Half-open interval intersection. Touching intervals do not overlap, and an
/// empty interval overlaps nothing.
pub fn intervals_overlap(a_start: i64, a_end: i64, b_start: i64, b_end: i64) -> bool {
    a_start < a_end && b_start < b_end && a_start < b_end && a_end > b_start
}

/// Whether `[candidate_start, candidate_end)` on `date` collides with any booking
/// that still occupies time on that calendar day
pub fn has_conflict(
    candidate_start: i64,
    candidate_end: i64,
    bookings: &[ExistingBooking],
    date: NaiveDate,
) -> bool {
    bookings
        .iter()
        .filter(|booking| booking.occupies_time())
        .filter(|booking| booking.date() == date)
        .any(|booking| {
            intervals_overlap(
                candidate_start,
                candidate_end,
                minutes_since_midnight(&booking.start, date),
                minutes_since_midnight(&booking.end, date),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::BookingStatus;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 16).unwrap()
    }

    fn booking_on(day: NaiveDate, start: (u32, u32), end: (u32, u32), status: BookingStatus) -> ExistingBooking {
        ExistingBooking::new(
            "booking::test",
            day.and_hms_opt(start.0, start.1, 0).unwrap(),
            day.and_hms_opt(end.0, end.1, 0).unwrap(),
            status,
        )
    }

    fn booking(start: (u32, u32), end: (u32, u32), status: BookingStatus) -> ExistingBooking {
        booking_on(date(), start, end, status)
    }

    #[test]
    fn test_intervals_overlap() {
        assert!(intervals_overlap(540, 600, 570, 630)); // partial
        assert!(intervals_overlap(540, 660, 570, 600)); // contains
        assert!(intervals_overlap(570, 600, 540, 660)); // contained
        assert!(intervals_overlap(540, 600, 540, 600)); // identical
        assert!(!intervals_overlap(540, 600, 600, 660)); // touching after
        assert!(!intervals_overlap(600, 660, 540, 600)); // touching before
        assert!(!intervals_overlap(570, 570, 540, 600)); // empty candidate
        assert!(!intervals_overlap(540, 600, 570, 570)); // empty booking
    }

    #[test]
    fn test_partial_overlap_conflicts() {
        let bookings = vec![booking((9, 30), (10, 30), BookingStatus::Confirmed)];
        assert!(has_conflict(600, 660, &bookings, date()));
        assert!(has_conflict(570, 630, &bookings, date()));
        assert!(!has_conflict(540, 570, &bookings, date()));
    }

    #[test]
    fn test_back_to_back_does_not_conflict() {
        let bookings = vec![booking((10, 0), (11, 0), BookingStatus::Pending)];
        // ends exactly when the booking starts
        assert!(!has_conflict(540, 600, &bookings, date()));
        // starts exactly when the booking ends
        assert!(!has_conflict(660, 720, &bookings, date()));
    }

    #[test]
    fn test_cancelled_and_no_show_are_ignored() {
        for status in [BookingStatus::Cancelled, BookingStatus::NoShow] {
            let bookings = vec![booking((9, 0), (12, 0), status)];
            assert!(!has_conflict(600, 660, &bookings, date()), "{:?} should not block", status);
        }
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::InProgress,
            BookingStatus::Completed,
        ] {
            let bookings = vec![booking((9, 0), (12, 0), status)];
            assert!(has_conflict(600, 660, &bookings, date()), "{:?} should block", status);
        }
    }

    #[test]
    fn test_other_days_are_ignored() {
        let next_day = date().succ_opt().unwrap();
        let bookings = vec![booking_on(next_day, (9, 0), (12, 0), BookingStatus::Confirmed)];
        assert!(!has_conflict(600, 660, &bookings, date()));
        assert!(has_conflict(600, 660, &bookings, next_day));
    }

    #[test]
    fn test_booking_past_midnight_blocks_evening() {
        let late = ExistingBooking::new(
            "booking::late",
            date().and_hms_opt(23, 0, 0).unwrap(),
            date().succ_opt().unwrap().and_hms_opt(0, 30, 0).unwrap(),
            BookingStatus::Confirmed,
        );
        assert_eq!(minutes_since_midnight(&late.end, date()), 1470);
        assert!(has_conflict(1410, 1439, &[late], date()));
    }
}
