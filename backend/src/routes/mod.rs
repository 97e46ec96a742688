//! Route definitions for the lead registration API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/leads", lead_routes())
}

/// Lead registration and query routes
fn lead_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_leads))
        .route("/register", post(handlers::register_lead))
        .route("/:lead_id", get(handlers::get_lead))
}
