//! # REST API Interface Layer
//!
//! Each `*_apis` module exposes a `router()`; [`api_router`] puts them
//! together under `/api`.
//!
//! - `GET  /barbers/:barber_id/time-slots?date=YYYY-MM-DD&duration=N`
//! - `PUT  /barbers/:barber_id/working-hours`
//! - `POST /time-slots/generate`
//! - `GET  /time-slots/default?date=YYYY-MM-DD&duration=N`
//! - `POST /bookings/plan`
//! - `GET  /calendar/current-date`, `POST /calendar/selected-date/step`
//! - `GET/POST/DELETE /session`, `PUT /session/user`

pub mod booking_plan_apis;
pub mod calendar_apis;
pub mod error;
pub mod mappers;
pub mod session_apis;
pub mod time_slot_apis;

pub use error::ApiError;

use axum::Router;

use crate::AppState;

pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(time_slot_apis::router())
        .nest("/bookings", booking_plan_apis::router())
        .nest("/calendar", calendar_apis::router())
        .nest("/session", session_apis::router())
}
