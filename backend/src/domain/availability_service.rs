//! Availability service.
//!
//! Loads a barber's schedule and bookings from storage, picks the working
//! periods for the requested weekday and runs the slot generator with the
//! injected clock. A barber with no schedule on file gets the default
//! business hours; a schedule without an entry for the weekday means the
//! barber does not work that day.

use anyhow::Context;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::calendar::CalendarService;
use crate::domain::clock::Clock;
use crate::domain::commands::availability::{TimeSlotQuery, TimeSlotQueryResult, VerifySlotQuery};
use crate::domain::models::time_slot::SlotError;
use crate::domain::models::working_period::{DomainWorkingHours, WorkingPeriod};
use crate::domain::slot_generator::SlotGenerator;
use crate::storage::{BookingStorage, Connection, WorkingHoursStorage};

#[derive(Debug, Error)]
pub enum AvailabilityError {
    /// The request itself is unusable
    #[error(transparent)]
    Slot(#[from] SlotError),
    /// Stored data could not be read, including malformed rows
    #[error("{0:#}")]
    Storage(anyhow::Error),
}

#[derive(Clone)]
pub struct AvailabilityService<C: Connection> {
    working_hours_repository: C::WorkingHoursRepository,
    booking_repository: C::BookingRepository,
    slot_generator: SlotGenerator,
    calendar_service: CalendarService,
    clock: Arc<dyn Clock>,
}

impl<C: Connection> AvailabilityService<C> {
    pub fn new(connection: Arc<C>, clock: Arc<dyn Clock>) -> Self {
        Self {
            working_hours_repository: connection.create_working_hours_repository(),
            booking_repository: connection.create_booking_repository(),
            slot_generator: SlotGenerator::new(),
            calendar_service: CalendarService::new(),
            clock,
        }
    }

    pub async fn get_time_slots(&self, query: TimeSlotQuery) -> Result<TimeSlotQueryResult, AvailabilityError> {
        let duration = SlotGenerator::resolve_duration(query.duration_minutes)?;
        let now = self.clock.now();

        let schedule = self
            .working_hours_repository
            .list_working_hours(&query.barber_id)
            .await
            .map_err(AvailabilityError::Storage)?;

        let Some(schedule) = schedule else {
            info!(
                "No working hours on file for barber {}, using default business hours",
                query.barber_id
            );
            let slots = self
                .slot_generator
                .generate_default_time_slots(query.date, Some(duration), now)?;
            return Ok(TimeSlotQueryResult {
                slots,
                used_default_hours: true,
                duration_minutes: duration,
            });
        };

        let periods = self.periods_for_date(&schedule, query.date);
        let bookings = self
            .booking_repository
            .list_bookings(&query.barber_id)
            .await
            .map_err(AvailabilityError::Storage)?;

        debug!(
            "Barber {} has {} periods and {} bookings on file for {}",
            query.barber_id,
            periods.len(),
            bookings.len(),
            query.date
        );

        let slots = self
            .slot_generator
            .generate_time_slots(&periods, &bookings, query.date, Some(duration), now)?;

        Ok(TimeSlotQueryResult {
            slots,
            used_default_hours: false,
            duration_minutes: duration,
        })
    }

    /// True when `start_time` is one of the emitted slots and it is available
    pub async fn verify_slot(&self, query: VerifySlotQuery) -> Result<bool, AvailabilityError> {
        let result = self
            .get_time_slots(TimeSlotQuery {
                barber_id: query.barber_id,
                date: query.date,
                duration_minutes: Some(query.duration_minutes),
            })
            .await?;

        Ok(result
            .slots
            .iter()
            .any(|slot| slot.start_time == query.start_time && slot.is_available))
    }

    /// Replace a barber's weekly schedule
    pub async fn set_working_hours(
        &self,
        barber_id: &str,
        hours: &[DomainWorkingHours],
    ) -> Result<(), AvailabilityError> {
        self.working_hours_repository
            .store_working_hours(barber_id, hours)
            .await
            .with_context(|| format!("Failed to store working hours for barber {}", barber_id))
            .map_err(AvailabilityError::Storage)
    }

    fn periods_for_date(&self, schedule: &[DomainWorkingHours], date: chrono::NaiveDate) -> Vec<WorkingPeriod> {
        let day = self.calendar_service.day_of_week(date);
        schedule
            .iter()
            .filter(|hours| hours.applies_to(day))
            .map(|hours| hours.period)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::FixedClock;
    use crate::domain::clock_time::ClockTime;
    use crate::storage::csv::test_utils::TestEnvironment;
    use crate::storage::csv::CsvConnection;
    use chrono::{NaiveDate, NaiveDateTime};
    use shared::DayOfWeek;

    const BARBER: &str = "barber::1";

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 16).unwrap()
    }

    fn sunday_before() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap().and_hms_opt(8, 0, 0).unwrap()
    }

    fn create_test_service(env: &TestEnvironment, now: NaiveDateTime) -> AvailabilityService<CsvConnection> {
        AvailabilityService::new(Arc::new(env.connection.clone()), Arc::new(FixedClock(now)))
    }

    fn query(duration: Option<i64>) -> TimeSlotQuery {
        TimeSlotQuery {
            barber_id: BARBER.to_string(),
            date: monday(),
            duration_minutes: duration,
        }
    }

    fn starts(result: &TimeSlotQueryResult) -> Vec<String> {
        result.slots.iter().map(|s| s.start_time.to_string()).collect()
    }

    #[tokio::test]
    async fn test_no_schedule_uses_default_hours() {
        let env = TestEnvironment::new().await.unwrap();
        let service = create_test_service(&env, sunday_before());

        let result = service.get_time_slots(query(None)).await.unwrap();
        assert!(result.used_default_hours);
        assert_eq!(result.duration_minutes, 60);
        assert_eq!(result.slots.len(), 21);
        assert_eq!(result.slots.first().unwrap().start_time, ClockTime::at(9, 0));
        assert_eq!(result.slots.last().unwrap().start_time, ClockTime::at(19, 0));
        assert!(result.slots.iter().all(|s| s.is_available));
    }

    #[tokio::test]
    async fn test_only_matching_weekday_is_used() {
        let env = TestEnvironment::new().await.unwrap();
        env.write_working_hours_csv(
            BARBER,
            "id,day_of_week,start_time,end_time,is_active\n\
             wh::1,MONDAY,09:00,11:00,true\n\
             wh::2,TUESDAY,13:00,18:00,true\n",
        );
        let service = create_test_service(&env, sunday_before());

        let result = service.get_time_slots(query(Some(60))).await.unwrap();
        assert!(!result.used_default_hours);
        assert_eq!(starts(&result), vec!["09:00", "09:30", "10:00"]);
    }

    #[tokio::test]
    async fn test_schedule_without_weekday_means_day_off() {
        let env = TestEnvironment::new().await.unwrap();
        env.write_working_hours_csv(
            BARBER,
            "id,day_of_week,start_time,end_time,is_active\n\
             wh::1,SATURDAY,10:00,16:00,true\n",
        );
        let service = create_test_service(&env, sunday_before());

        let result = service.get_time_slots(query(None)).await.unwrap();
        assert!(!result.used_default_hours);
        assert!(result.slots.is_empty());
    }

    #[tokio::test]
    async fn test_bookings_and_clock_mark_slots_unavailable() {
        let env = TestEnvironment::new().await.unwrap();
        env.write_working_hours_csv(
            BARBER,
            "id,day_of_week,start_time,end_time,is_active\n\
             wh::1,MONDAY,09:00,12:00,true\n",
        );
        env.write_bookings_csv(
            BARBER,
            "id,start_time,end_time,status,service_id\n\
             booking::1,2025-06-16T10:30:00,2025-06-16T11:00:00,CONFIRMED,\n\
             booking::2,2025-06-16T11:00:00,2025-06-16T12:00:00,CANCELLED,\n",
        );
        let now = monday().and_hms_opt(9, 15, 0).unwrap();
        let service = create_test_service(&env, now);

        let result = service.get_time_slots(query(Some(30))).await.unwrap();
        let availability: Vec<(String, bool)> = result
            .slots
            .iter()
            .map(|s| (s.start_time.to_string(), s.is_available))
            .collect();
        assert_eq!(
            availability,
            vec![
                ("09:00".to_string(), false),
                ("09:30".to_string(), true),
                ("10:00".to_string(), true),
                ("10:30".to_string(), false),
                ("11:00".to_string(), true),
                ("11:30".to_string(), true),
            ]
        );
    }

    #[tokio::test]
    async fn test_invalid_duration_is_rejected() {
        let env = TestEnvironment::new().await.unwrap();
        let service = create_test_service(&env, sunday_before());

        let err = service.get_time_slots(query(Some(0))).await.unwrap_err();
        assert!(matches!(err, AvailabilityError::Slot(SlotError::InvalidDuration(0))));
    }

    #[tokio::test]
    async fn test_malformed_schedule_is_a_storage_error() {
        let env = TestEnvironment::new().await.unwrap();
        env.write_working_hours_csv(
            BARBER,
            "id,day_of_week,start_time,end_time,is_active\n\
             wh::1,MONDAY,nine,20:00,true\n",
        );
        let service = create_test_service(&env, sunday_before());

        match service.get_time_slots(query(None)).await {
            Err(AvailabilityError::Storage(err)) => {
                assert!(matches!(err.downcast_ref::<SlotError>(), Some(SlotError::Format(_))));
            }
            other => panic!("expected a storage error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_verify_slot() {
        let env = TestEnvironment::new().await.unwrap();
        env.write_working_hours_csv(
            BARBER,
            "id,day_of_week,start_time,end_time,is_active\n\
             wh::1,MONDAY,09:00,12:00,true\n",
        );
        env.write_bookings_csv(
            BARBER,
            "id,start_time,end_time,status,service_id\n\
             booking::1,2025-06-16T10:30:00,2025-06-16T11:00:00,PENDING,\n",
        );
        let service = create_test_service(&env, sunday_before());

        let verify = |hours: u16, minutes: u16, duration: i64| VerifySlotQuery {
            barber_id: BARBER.to_string(),
            date: monday(),
            start_time: ClockTime::at(hours, minutes),
            duration_minutes: duration,
        };

        assert!(service.verify_slot(verify(9, 0, 60)).await.unwrap());
        // runs into the pending booking
        assert!(!service.verify_slot(verify(10, 0, 60)).await.unwrap());
        // not on the 30 minute grid
        assert!(!service.verify_slot(verify(9, 15, 30)).await.unwrap());
        // would end after closing
        assert!(!service.verify_slot(verify(11, 30, 60)).await.unwrap());
    }

    #[tokio::test]
    async fn test_set_working_hours_replaces_schedule() {
        let env = TestEnvironment::new().await.unwrap();
        let service = create_test_service(&env, sunday_before());

        let hours = vec![DomainWorkingHours {
            id: "wh::1".to_string(),
            day_of_week: DayOfWeek::Monday,
            period: WorkingPeriod::new(ClockTime::at(14, 0), ClockTime::at(15, 0), true),
        }];
        service.set_working_hours(BARBER, &hours).await.unwrap();

        let result = service.get_time_slots(query(Some(30))).await.unwrap();
        assert!(!result.used_default_hours);
        assert_eq!(starts(&result), vec!["14:00", "14:30"]);
    }
}
