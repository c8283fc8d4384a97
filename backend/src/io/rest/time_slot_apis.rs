use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use shared::{GenerateTimeSlotsRequest, TimeSlotsResponse, WorkingHours};
use tracing::{error, info};

use super::error::ApiError;
use super::mappers::{BookingMapper, TimeSlotMapper, WorkingHoursMapper};
use crate::domain::commands::availability::TimeSlotQuery;
use crate::domain::models::booking::{parse_timestamp, ExistingBooking};
use crate::domain::models::working_period::{DomainWorkingHours, WorkingPeriod};
use crate::domain::{Clock, SlotGenerator};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TimeSlotsParams {
    pub date: String,
    pub duration: Option<i64>,
}

/// Create a router for time slot related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/barbers/:barber_id/time-slots", get(get_barber_time_slots))
        .route("/barbers/:barber_id/working-hours", put(put_working_hours))
        .route("/time-slots/generate", post(generate_time_slots))
        .route("/time-slots/default", get(get_default_time_slots))
}

/// Slots for a barber's stored schedule and bookings
async fn get_barber_time_slots(
    State(state): State<AppState>,
    Path(barber_id): Path<String>,
    Query(params): Query<TimeSlotsParams>,
) -> impl IntoResponse {
    info!("GET /api/barbers/{}/time-slots - params: {:?}", barber_id, params);

    let date = match state.calendar_service.parse_iso_date(&params.date) {
        Ok(date) => date,
        Err(e) => return ApiError::from(e).into_response(),
    };

    let query = TimeSlotQuery {
        barber_id: barber_id.clone(),
        date,
        duration_minutes: params.duration,
    };

    match state.availability_service.get_time_slots(query).await {
        Ok(result) => {
            let response = TimeSlotsResponse {
                barber_id: Some(barber_id),
                date: state.calendar_service.format_iso_date(date),
                duration_minutes: result.duration_minutes,
                used_default_hours: result.used_default_hours,
                slots: TimeSlotMapper::to_dtos(&result.slots),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to get time slots for barber {}: {}", barber_id, e);
            ApiError::from(e).into_response()
        }
    }
}

/// Replace a barber's weekly schedule
async fn put_working_hours(
    State(state): State<AppState>,
    Path(barber_id): Path<String>,
    Json(hours): Json<Vec<WorkingHours>>,
) -> impl IntoResponse {
    info!("PUT /api/barbers/{}/working-hours - {} records", barber_id, hours.len());

    let domain_hours = match hours
        .into_iter()
        .map(WorkingHoursMapper::to_domain)
        .collect::<Result<Vec<DomainWorkingHours>, _>>()
    {
        Ok(domain_hours) => domain_hours,
        Err(e) => return ApiError::from(e).into_response(),
    };

    match state.availability_service.set_working_hours(&barber_id, &domain_hours).await {
        Ok(()) => {
            let stored: Vec<WorkingHours> = domain_hours.into_iter().map(WorkingHoursMapper::to_dto).collect();
            (StatusCode::OK, Json(stored)).into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Stateless generation from the periods and bookings in the request body
async fn generate_time_slots(
    State(state): State<AppState>,
    Json(request): Json<GenerateTimeSlotsRequest>,
) -> impl IntoResponse {
    info!(
        "POST /api/time-slots/generate - {} periods, {} bookings, date {}",
        request.periods.len(),
        request.bookings.len(),
        request.date
    );

    match generate_from_request(&state, request) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => e.into_response(),
    }
}

fn generate_from_request(state: &AppState, request: GenerateTimeSlotsRequest) -> Result<TimeSlotsResponse, ApiError> {
    let date = state.calendar_service.parse_iso_date(&request.date)?;
    let periods = request
        .periods
        .iter()
        .map(WorkingHoursMapper::period_to_domain)
        .collect::<Result<Vec<WorkingPeriod>, _>>()?;
    let bookings = request
        .bookings
        .into_iter()
        .map(BookingMapper::to_domain)
        .collect::<Result<Vec<ExistingBooking>, _>>()?;
    let now = match request.now.as_deref() {
        Some(raw) => parse_timestamp(raw)?,
        None => state.clock.now(),
    };

    let duration = SlotGenerator::resolve_duration(request.duration_minutes)?;
    let slots = state
        .slot_generator
        .generate_time_slots(&periods, &bookings, date, Some(duration), now)?;

    Ok(TimeSlotsResponse {
        barber_id: None,
        date: state.calendar_service.format_iso_date(date),
        duration_minutes: duration,
        used_default_hours: false,
        slots: TimeSlotMapper::to_dtos(&slots),
    })
}

/// Slots for the default 09:00-20:00 day
async fn get_default_time_slots(
    State(state): State<AppState>,
    Query(params): Query<TimeSlotsParams>,
) -> impl IntoResponse {
    info!("GET /api/time-slots/default - params: {:?}", params);

    match default_slots(&state, &params) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => e.into_response(),
    }
}

fn default_slots(state: &AppState, params: &TimeSlotsParams) -> Result<TimeSlotsResponse, ApiError> {
    let date = state.calendar_service.parse_iso_date(&params.date)?;
    let duration = SlotGenerator::resolve_duration(params.duration)?;
    let slots = state
        .slot_generator
        .generate_default_time_slots(date, Some(duration), state.clock.now())?;

    Ok(TimeSlotsResponse {
        barber_id: None,
        date: state.calendar_service.format_iso_date(date),
        duration_minutes: duration,
        used_default_hours: true,
        slots: TimeSlotMapper::to_dtos(&slots),
    })
}
