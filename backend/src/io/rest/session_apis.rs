use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, put},
    Router,
};
use shared::{AuthSession, SessionResponse, UpdateUserRequest};
use tracing::{info, warn};

use super::error::ApiError;
use crate::AppState;

/// Create a router for session APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_session).post(sign_in).delete(sign_out))
        .route("/user", put(update_user))
}

async fn get_session(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/session");

    match state.session_service.current_session().await {
        Ok(session) => (StatusCode::OK, Json(SessionResponse { session })).into_response(),
        Err(e) => ApiError::internal(e).into_response(),
    }
}

async fn sign_in(State(state): State<AppState>, Json(session): Json<AuthSession>) -> impl IntoResponse {
    info!("POST /api/session - user {}", session.user.id);

    if session.token.trim().is_empty() {
        return ApiError::BadRequest("Session token cannot be empty".to_string()).into_response();
    }

    match state.session_service.sign_in(session).await {
        Ok(session) => (
            StatusCode::CREATED,
            Json(SessionResponse {
                session: Some(session),
            }),
        )
            .into_response(),
        Err(e) => ApiError::internal(e).into_response(),
    }
}

async fn sign_out(State(state): State<AppState>) -> impl IntoResponse {
    info!("DELETE /api/session");

    match state.session_service.sign_out().await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => ApiError::internal(e).into_response(),
    }
}

async fn update_user(State(state): State<AppState>, Json(request): Json<UpdateUserRequest>) -> impl IntoResponse {
    info!("PUT /api/session/user - user {}", request.user.id);

    match state.session_service.current_session().await {
        Ok(Some(_)) => {}
        Ok(None) => {
            warn!("Profile update without a signed-in user");
            return ApiError::Conflict("No user is signed in".to_string()).into_response();
        }
        Err(e) => return ApiError::internal(e).into_response(),
    }

    match state.session_service.update_user(request.user).await {
        Ok(session) => (
            StatusCode::OK,
            Json(SessionResponse {
                session: Some(session),
            }),
        )
            .into_response(),
        Err(e) => ApiError::internal(e).into_response(),
    }
}
