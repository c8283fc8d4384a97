//! Domain-level command and query types.
//! Services take and return these; the REST layer maps the public DTOs of
//! the `shared` crate onto them.

pub mod availability {
    use chrono::NaiveDate;

    use crate::domain::clock_time::ClockTime;
    use crate::domain::models::time_slot::DomainTimeSlot;

    /// Slots for one barber on one date.
    #[derive(Debug, Clone)]
    pub struct TimeSlotQuery {
        pub barber_id: String,
        pub date: NaiveDate,
        pub duration_minutes: Option<i64>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct TimeSlotQueryResult {
        pub slots: Vec<DomainTimeSlot>,
        /// No schedule was on file, so the default business hours were used
        pub used_default_hours: bool,
        /// Duration actually used after applying the default
        pub duration_minutes: i64,
    }

    /// Is `start_time` an offered, available slot of the given length?
    #[derive(Debug, Clone)]
    pub struct VerifySlotQuery {
        pub barber_id: String,
        pub date: NaiveDate,
        pub start_time: ClockTime,
        pub duration_minutes: i64,
    }
}

pub mod booking_plan {
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::domain::clock_time::ClockTime;
    use crate::domain::models::cart::DomainCart;

    #[derive(Debug, Clone)]
    pub struct PlanBookingCommand {
        pub user_id: String,
        pub cart: DomainCart,
        pub date: NaiveDate,
        pub start_time: ClockTime,
        pub notes: Option<String>,
        /// Barber to book with when the cart has none selected
        pub fallback_barber_id: Option<String>,
    }

    /// One booking-creation call of a plan.
    #[derive(Debug, Clone, PartialEq)]
    pub struct PlannedBooking {
        pub user_id: String,
        pub barber_id: String,
        pub barber_shop_id: String,
        pub service_id: String,
        pub start: NaiveDateTime,
        pub end: NaiveDateTime,
        pub notes: Option<String>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct BookingPlan {
        pub group_id: String,
        pub bookings: Vec<PlannedBooking>,
        pub total_price: f64,
        pub total_duration_minutes: i64,
    }
}
