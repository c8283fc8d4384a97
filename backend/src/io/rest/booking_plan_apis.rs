use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use shared::{PlanBookingRequest, PlanBookingResponse};
use tracing::{info, warn};

use super::error::ApiError;
use super::mappers::CartMapper;
use crate::domain::clock_time::ClockTime;
use crate::domain::commands::booking_plan::PlanBookingCommand;
use crate::domain::models::time_slot::SlotError;
use crate::AppState;

/// Create a router for booking plan APIs
pub fn router() -> Router<AppState> {
    Router::new().route("/plan", post(plan_booking))
}

/// Lay the cart's services out as back-to-back bookings from the chosen slot
async fn plan_booking(State(state): State<AppState>, Json(request): Json<PlanBookingRequest>) -> impl IntoResponse {
    info!(
        "POST /api/bookings/plan - user {}, {} services, {} {}",
        request.user_id,
        request.cart.services.len(),
        request.date,
        request.start_time
    );

    let command = match to_command(&state, request) {
        Ok(command) => command,
        Err(e) => return e.into_response(),
    };

    match state.booking_plan_service.plan(command).await {
        Ok(plan) => {
            let response: PlanBookingResponse = CartMapper::plan_to_dto(plan);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            warn!("Booking plan rejected: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

fn to_command(state: &AppState, request: PlanBookingRequest) -> Result<PlanBookingCommand, ApiError> {
    let date = state.calendar_service.parse_iso_date(&request.date)?;
    let start_time = request.start_time.parse::<ClockTime>().map_err(SlotError::from)?;

    Ok(PlanBookingCommand {
        user_id: request.user_id,
        cart: CartMapper::to_domain(request.cart),
        date,
        start_time,
        notes: request.notes,
        fallback_barber_id: request.fallback_barber_id,
    })
}
