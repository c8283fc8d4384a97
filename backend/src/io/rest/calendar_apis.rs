use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use shared::{CurrentDateResponse, StepSelectedDateRequest, StepSelectedDateResponse};
use tracing::info;

use super::error::ApiError;
use crate::domain::Clock;
use crate::AppState;

/// Create a router for calendar related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/current-date", get(get_current_date))
        .route("/selected-date/step", post(step_selected_date))
}

/// Get current date information
async fn get_current_date(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/calendar/current-date");

    let response: CurrentDateResponse = state.calendar_service.get_current_date(state.clock.now());
    (StatusCode::OK, Json(response)).into_response()
}

/// Move the selected booking date one day, never before today
async fn step_selected_date(
    State(state): State<AppState>,
    Json(request): Json<StepSelectedDateRequest>,
) -> impl IntoResponse {
    info!("POST /api/calendar/selected-date/step - {:?}", request);

    let current = match state.calendar_service.parse_iso_date(&request.current) {
        Ok(date) => date,
        Err(e) => return ApiError::from(e).into_response(),
    };

    let today = state.clock.now().date();
    let (date, changed) = state.calendar_service.step_selected_date(current, request.step, today);

    let response = StepSelectedDateResponse {
        date: state.calendar_service.format_iso_date(date),
        formatted_date: state.calendar_service.format_date_for_display(date),
        changed,
    };
    (StatusCode::OK, Json(response)).into_response()
}
