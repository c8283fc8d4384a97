//! # Storage Module
//!
//! Handles persistence for the booking backend: barber schedules, the
//! bookings they already carry, and the client's signed-in session.
//!
//! The domain layer only sees the traits in [`traits`]; the file-backed
//! implementation lives in [`csv`] and keeps one directory per barber.

pub mod traits;
pub mod csv;

pub use traits::*;
pub use self::csv::{BookingRepository, CsvConnection, SessionRepository, WorkingHoursRepository};
