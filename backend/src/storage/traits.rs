//! # Storage Traits
//!
//! Storage abstractions used by the domain services, so the file backend can
//! be swapped for a database or a remote API client without touching them.

use anyhow::Result;
use async_trait::async_trait;
use shared::AuthSession;

use crate::domain::models::booking::ExistingBooking;
use crate::domain::models::working_period::DomainWorkingHours;

/// Weekly working hours per barber
#[async_trait]
pub trait WorkingHoursStorage: Send + Sync {
    /// All working-hours records of a barber.
    /// `None` means no schedule is on file, which is different from an empty schedule.
    async fn list_working_hours(&self, barber_id: &str) -> Result<Option<Vec<DomainWorkingHours>>>;

    /// Replace the barber's whole schedule
    async fn store_working_hours(&self, barber_id: &str, hours: &[DomainWorkingHours]) -> Result<()>;
}

/// Read access to the bookings a barber already has
#[async_trait]
pub trait BookingStorage: Send + Sync {
    /// Every booking of the barber, any date and any status
    async fn list_bookings(&self, barber_id: &str) -> Result<Vec<ExistingBooking>>;
}

/// The client's persisted sign-in state
#[async_trait]
pub trait SessionStorage: Send + Sync {
    async fn get_session(&self) -> Result<Option<AuthSession>>;

    async fn store_session(&self, session: &AuthSession) -> Result<()>;

    /// Returns true when a session was present
    async fn clear_session(&self) -> Result<bool>;
}

/// Factory for the repositories of one storage backend
pub trait Connection: Send + Sync + Clone {
    type WorkingHoursRepository: WorkingHoursStorage + Clone;
    type BookingRepository: BookingStorage + Clone;
    type SessionRepository: SessionStorage + Clone;

    fn create_working_hours_repository(&self) -> Self::WorkingHoursRepository;

    fn create_booking_repository(&self) -> Self::BookingRepository;

    fn create_session_repository(&self) -> Self::SessionRepository;
}
