//! Inbound adapter - The caller-facing HTTP API
//!
//! ```text
//! GET /health                      (open)
//! /api/police/*   ── bearer gate ── handlers ── PoliceServices
//! ```

pub mod auth;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::{get, post, put},
    Router,
};
use police_usecase::PoliceServices;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Shared state handed to every handler
pub struct AppState {
    pub services: PoliceServices,
}

impl AppState {
    pub fn new(services: PoliceServices) -> Self {
        Self { services }
    }
}

/// Create the API router
pub fn create_router(state: Arc<AppState>, cors_allowed_origin: &str) -> Router {
    let api = Router::new()
        // Officers
        .route(
            "/officers",
            get(handlers::officers::list_officers).post(handlers::officers::create_officer),
        )
        .route("/officers/{badge}", get(handlers::officers::officer_by_badge))
        // Violations
        .route("/violations", post(handlers::violations::issue_violation))
        .route(
            "/violations/plate/{plate}",
            get(handlers::violations::violations_by_plate),
        )
        .route("/violations/{id}/pay", put(handlers::violations::pay_violation))
        .route(
            "/violations/{id}/dismiss",
            put(handlers::violations::dismiss_violation),
        )
        // Accidents
        .route("/accidents", post(handlers::accidents::report_accident))
        .route(
            "/accidents/plate/{plate}",
            get(handlers::accidents::accidents_by_plate),
        )
        // Stolen vehicles
        .route(
            "/stolen",
            get(handlers::stolen::list_stolen).post(handlers::stolen::report_stolen),
        )
        .route("/stolen/{id}/recover", put(handlers::stolen::recover_stolen))
        // Flags: a plate for GET, an id for resolve. The router wants one
        // parameter name per position.
        .route("/flags", post(handlers::flags::add_flag))
        .route("/flags/{target}", get(handlers::flags::active_flags))
        .route("/flags/{target}/resolve", put(handlers::flags::resolve_flag))
        // Cross-record views
        .route("/status/{plate}", get(handlers::vehicles::vehicle_status))
        .route(
            "/vehicles/plate/{plate}",
            get(handlers::vehicles::lookup_vehicle),
        )
        .layer(middleware::from_fn(auth::require_bearer));

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api/police", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_allowed_origin))
        .with_state(state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    match origin.parse::<HeaderValue>() {
        Ok(origin) => layer.allow_origin(origin),
        Err(_) => {
            warn!(origin = %origin, "Invalid CORS origin, cross-origin requests will be refused");
            layer
        }
    }
}
