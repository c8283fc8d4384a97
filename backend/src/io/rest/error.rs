//! Translation of domain errors into HTTP responses with an
//! `{"error": "..."}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::ErrorResponse;
use thiserror::Error;
use tracing::error;

use crate::domain::calendar::CalendarError;
use crate::domain::models::time_slot::SlotError;
use crate::domain::{AvailabilityError, BookingPlanError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Log the full chain, answer 500
    pub fn internal(err: anyhow::Error) -> Self {
        error!("Internal error: {:#}", err);
        ApiError::Internal(format!("{:#}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<SlotError> for ApiError {
    fn from(err: SlotError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<CalendarError> for ApiError {
    fn from(err: CalendarError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<AvailabilityError> for ApiError {
    fn from(err: AvailabilityError) -> Self {
        match err {
            AvailabilityError::Slot(slot) => slot.into(),
            AvailabilityError::Storage(storage) => ApiError::internal(storage),
        }
    }
}

impl From<BookingPlanError> for ApiError {
    fn from(err: BookingPlanError) -> Self {
        match err {
            BookingPlanError::EmptyCart | BookingPlanError::MissingBarber => ApiError::BadRequest(err.to_string()),
            BookingPlanError::SlotUnavailable(_) => ApiError::Conflict(err.to_string()),
            BookingPlanError::Slot(slot) => slot.into(),
            BookingPlanError::Availability(availability) => availability.into(),
        }
    }
}
