//! Sequential booking plan for a multi-service visit.
//!
//! Every service in the cart becomes one booking. They are laid out back to
//! back from the chosen start, in cart order, and share a group id so the
//! caller creating them can treat the visit as one unit.

use chrono::{Duration, NaiveTime};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::domain::availability_service::{AvailabilityError, AvailabilityService};
use crate::domain::commands::availability::VerifySlotQuery;
use crate::domain::commands::booking_plan::{BookingPlan, PlanBookingCommand, PlannedBooking};
use crate::domain::models::time_slot::SlotError;
use crate::domain::slot_generator::SlotGenerator;
use crate::storage::Connection;

#[derive(Debug, Error)]
pub enum BookingPlanError {
    #[error("Cart is empty, select at least one service")]
    EmptyCart,
    #[error("No barber selected and no shop barber available")]
    MissingBarber,
    #[error("Selected time slot {0} is not available")]
    SlotUnavailable(String),
    #[error(transparent)]
    Slot(#[from] SlotError),
    #[error(transparent)]
    Availability(#[from] AvailabilityError),
}

#[derive(Clone)]
pub struct BookingPlanService<C: Connection> {
    availability_service: AvailabilityService<C>,
}

impl<C: Connection> BookingPlanService<C> {
    pub fn new(availability_service: AvailabilityService<C>) -> Self {
        Self { availability_service }
    }

    pub async fn plan(&self, command: PlanBookingCommand) -> Result<BookingPlan, BookingPlanError> {
        if command.cart.is_empty() {
            return Err(BookingPlanError::EmptyCart);
        }
        for service in &command.cart.services {
            SlotGenerator::resolve_duration(Some(service.duration_minutes))?;
        }

        let barber_id = command
            .cart
            .barber_id
            .clone()
            .or_else(|| command.fallback_barber_id.clone())
            .ok_or(BookingPlanError::MissingBarber)?;

        // the whole visit has to fit in one free window
        let total_duration = command
            .cart
            .total_duration_minutes()
            .ok_or(SlotError::InvalidDuration(i64::MAX))?;
        let available = self
            .availability_service
            .verify_slot(VerifySlotQuery {
                barber_id: barber_id.clone(),
                date: command.date,
                start_time: command.start_time,
                duration_minutes: total_duration,
            })
            .await?;
        if !available {
            return Err(BookingPlanError::SlotUnavailable(format!(
                "{} on {}",
                command.start_time, command.date
            )));
        }

        let mut cursor = command.date.and_time(NaiveTime::MIN) + Duration::minutes(command.start_time.minutes());
        let mut bookings = Vec::with_capacity(command.cart.services.len());
        for service in &command.cart.services {
            let end = cursor + Duration::minutes(service.duration_minutes);
            bookings.push(PlannedBooking {
                user_id: command.user_id.clone(),
                barber_id: barber_id.clone(),
                barber_shop_id: command.cart.barber_shop_id.clone(),
                service_id: service.id.clone(),
                start: cursor,
                end,
                notes: command.notes.clone(),
            });
            cursor = end;
        }

        let plan = BookingPlan {
            group_id: Uuid::new_v4().to_string(),
            bookings,
            total_price: command.cart.total_price(),
            total_duration_minutes: total_duration,
        };
        info!(
            "Planned {} bookings for user {} with barber {} (group {})",
            plan.bookings.len(),
            command.user_id,
            barber_id,
            plan.group_id
        );
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::FixedClock;
    use crate::domain::clock_time::ClockTime;
    use crate::domain::models::cart::{CartService, DomainCart};
    use crate::storage::csv::test_utils::TestEnvironment;
    use crate::storage::csv::CsvConnection;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 16).unwrap()
    }

    fn create_test_service(env: &TestEnvironment) -> BookingPlanService<CsvConnection> {
        let now = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap().and_hms_opt(12, 0, 0).unwrap();
        let availability = AvailabilityService::new(Arc::new(env.connection.clone()), Arc::new(FixedClock(now)));
        BookingPlanService::new(availability)
    }

    fn service(id: &str, price: f64, minutes: i64) -> CartService {
        CartService {
            id: id.to_string(),
            name: id.to_string(),
            price,
            duration_minutes: minutes,
        }
    }

    fn command(cart: DomainCart, hours: u16, minutes: u16) -> PlanBookingCommand {
        PlanBookingCommand {
            user_id: "user::1".to_string(),
            cart,
            date: monday(),
            start_time: ClockTime::at(hours, minutes),
            notes: Some("fade on the sides".to_string()),
            fallback_barber_id: None,
        }
    }

    fn cart_with(services: Vec<CartService>) -> DomainCart {
        let mut cart = DomainCart::new("shop::1", Some("barber::1".to_string()));
        for s in services {
            cart.add_service(s);
        }
        cart
    }

    #[tokio::test]
    async fn test_plan_lays_services_back_to_back() {
        let env = TestEnvironment::new().await.unwrap();
        let service_under_test = create_test_service(&env);

        let cart = cart_with(vec![service("svc::cut", 25.0, 45), service("svc::beard", 15.0, 30)]);
        let plan = service_under_test.plan(command(cart, 10, 0)).await.unwrap();

        assert_eq!(plan.bookings.len(), 2);
        assert_eq!(plan.total_price, 40.0);
        assert_eq!(plan.total_duration_minutes, 75);
        assert!(!plan.group_id.is_empty());

        let first = &plan.bookings[0];
        let second = &plan.bookings[1];
        assert_eq!(first.service_id, "svc::cut");
        assert_eq!(first.start, monday().and_hms_opt(10, 0, 0).unwrap());
        assert_eq!(first.end, monday().and_hms_opt(10, 45, 0).unwrap());
        assert_eq!(second.start, first.end);
        assert_eq!(second.end, monday().and_hms_opt(11, 15, 0).unwrap());
        assert_eq!(second.barber_id, "barber::1");
        assert_eq!(second.barber_shop_id, "shop::1");
        assert_eq!(second.notes.as_deref(), Some("fade on the sides"));
    }

    #[tokio::test]
    async fn test_plans_get_distinct_group_ids() {
        let env = TestEnvironment::new().await.unwrap();
        let service_under_test = create_test_service(&env);

        let cart = cart_with(vec![service("svc::cut", 25.0, 30)]);
        let a = service_under_test.plan(command(cart.clone(), 9, 0)).await.unwrap();
        let b = service_under_test.plan(command(cart, 9, 0)).await.unwrap();
        assert_ne!(a.group_id, b.group_id);
    }

    #[tokio::test]
    async fn test_empty_cart_is_rejected() {
        let env = TestEnvironment::new().await.unwrap();
        let service_under_test = create_test_service(&env);

        let err = service_under_test.plan(command(cart_with(vec![]), 9, 0)).await.unwrap_err();
        assert!(matches!(err, BookingPlanError::EmptyCart));
    }

    #[tokio::test]
    async fn test_missing_barber_uses_fallback_or_fails() {
        let env = TestEnvironment::new().await.unwrap();
        let service_under_test = create_test_service(&env);

        let mut cart = cart_with(vec![service("svc::cut", 25.0, 30)]);
        cart.barber_id = None;

        let err = service_under_test.plan(command(cart.clone(), 9, 0)).await.unwrap_err();
        assert!(matches!(err, BookingPlanError::MissingBarber));

        let mut with_fallback = command(cart, 9, 0);
        with_fallback.fallback_barber_id = Some("barber::shop".to_string());
        let plan = service_under_test.plan(with_fallback).await.unwrap();
        assert_eq!(plan.bookings[0].barber_id, "barber::shop");
    }

    #[tokio::test]
    async fn test_whole_visit_must_fit_the_free_window() {
        let env = TestEnvironment::new().await.unwrap();
        env.write_bookings_csv(
            "barber::1",
            "id,start_time,end_time,status,service_id\n\
             booking::1,2025-06-16T11:00:00,2025-06-16T12:00:00,CONFIRMED,\n",
        );
        env.write_working_hours_csv(
            "barber::1",
            "id,day_of_week,start_time,end_time,is_active\n\
             wh::1,MONDAY,09:00,18:00,true\n",
        );
        let service_under_test = create_test_service(&env);

        // 10:00 is free for the first service alone, but the second runs into 11:00
        let cart = cart_with(vec![service("svc::cut", 25.0, 30), service("svc::beard", 15.0, 45)]);
        let err = service_under_test.plan(command(cart, 10, 0)).await.unwrap_err();
        assert!(matches!(err, BookingPlanError::SlotUnavailable(_)));
    }

    #[tokio::test]
    async fn test_non_positive_service_duration_is_rejected() {
        let env = TestEnvironment::new().await.unwrap();
        let service_under_test = create_test_service(&env);

        let cart = cart_with(vec![service("svc::cut", 25.0, 30), service("svc::free", 0.0, 0)]);
        let err = service_under_test.plan(command(cart, 9, 0)).await.unwrap_err();
        assert!(matches!(err, BookingPlanError::Slot(SlotError::InvalidDuration(0))));
    }

    #[tokio::test]
    async fn test_oversized_service_duration_is_rejected() {
        let env = TestEnvironment::new().await.unwrap();
        let service_under_test = create_test_service(&env);

        let cart = cart_with(vec![service("svc::cut", 25.0, 30), service("svc::forever", 0.0, i64::MAX)]);
        let err = service_under_test.plan(command(cart, 9, 0)).await.unwrap_err();
        assert!(matches!(err, BookingPlanError::Slot(SlotError::InvalidDuration(i64::MAX))));
    }

    #[tokio::test]
    async fn test_visit_longer_than_a_day_is_rejected() {
        let env = TestEnvironment::new().await.unwrap();
        let service_under_test = create_test_service(&env);

        let cart = cart_with(vec![service("svc::a", 0.0, 1000), service("svc::b", 0.0, 1000)]);
        let err = service_under_test.plan(command(cart, 9, 0)).await.unwrap_err();
        assert!(matches!(
            err,
            BookingPlanError::Availability(AvailabilityError::Slot(SlotError::InvalidDuration(2000)))
        ));
    }
}
