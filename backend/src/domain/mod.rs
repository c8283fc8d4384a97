//! # Domain Module
//!
//! Business logic of the barber booking backend, independent of HTTP and of
//! the storage format.
//!
//! ## Module Organization
//!
//! - **clock_time**: `HH:MM` clock times as minutes since midnight
//! - **conflict**: overlap between a candidate slot and existing bookings
//! - **slot_generator**: the appointment time-slot algorithm
//! - **availability_service**: schedule and booking lookup around the generator
//! - **booking_plan**: turning a cart into back-to-back bookings
//! - **calendar**: weekday, display formatting and selected-date stepping
//! - **session_service**: the client's persisted sign-in state
//!
//! ## Business Rules
//!
//! - Candidate slots start every 30 minutes and must end by closing time
//! - A slot is available when no booking overlaps it and it starts strictly
//!   after now; cancelled and no-show bookings are ignored
//! - A barber with no schedule on file is offered 09:00-20:00
//! - The selected booking date never moves before today

pub mod availability_service;
pub mod booking_plan;
pub mod calendar;
pub mod clock;
pub mod clock_time;
pub mod commands;
pub mod conflict;
pub mod models;
pub mod session_service;
pub mod slot_generator;

pub use availability_service::*;
pub use booking_plan::*;
pub use calendar::*;
pub use clock::*;
pub use session_service::*;
pub use slot_generator::*;
