//! # Barber Booking Backend
//!
//! Appointment availability for a barber-shop booking client.
//!
//! ## Architecture
//!
//! - **domain**: slot generation, availability, booking plans, calendar and session logic
//! - **storage**: storage traits and the CSV/YAML file backend
//! - **io**: the REST API built on Axum
//! - **config**: runtime settings read from the environment

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::Config;
use crate::domain::{
    AvailabilityService, BookingPlanService, CalendarService, Clock, SessionService, SlotGenerator, SystemClock,
};
use crate::storage::CsvConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub availability_service: AvailabilityService<CsvConnection>,
    pub booking_plan_service: BookingPlanService<CsvConnection>,
    pub calendar_service: CalendarService,
    pub session_service: SessionService<CsvConnection>,
    pub slot_generator: SlotGenerator,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(connection: Arc<CsvConnection>, clock: Arc<dyn Clock>) -> Self {
        let availability_service = AvailabilityService::new(connection.clone(), clock.clone());
        let booking_plan_service = BookingPlanService::new(availability_service.clone());

        Self {
            availability_service,
            booking_plan_service,
            calendar_service: CalendarService::new(),
            session_service: SessionService::new(connection),
            slot_generator: SlotGenerator::new(),
            clock,
        }
    }
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &Config) -> Result<AppState> {
    info!("Setting up data directory {}", config.data_dir.display());
    let connection = CsvConnection::new(&config.data_dir)?;

    info!("Setting up application state");
    Ok(AppState::new(Arc::new(connection), Arc::new(SystemClock)))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &Config) -> Result<Router> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin '{}'", config.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    Ok(Router::new()
        .nest("/api", io::rest::api_router())
        .layer(cors)
        .with_state(app_state))
}
