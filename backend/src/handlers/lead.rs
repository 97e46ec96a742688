//! Lead registration HTTP handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use shared::models::RegisterRequest;
use shared::validation::validate_register_request;

use crate::error::AppError;
use crate::AppState;

/// Register a new lead
pub async fn register_lead(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return AppError::from(rejection).into_response(),
    };

    let input = match validate_register_request(&request) {
        Ok(input) => input,
        Err(errors) => return AppError::from(errors).into_response(),
    };

    match state.leads.register(input).await {
        Ok(response) => (StatusCode::CREATED, Json(response)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List all leads
pub async fn list_leads(State(state): State<AppState>) -> impl IntoResponse {
    match state.leads.get_leads().await {
        Ok(leads) => (StatusCode::OK, Json(leads)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a specific lead
pub async fn get_lead(
    State(state): State<AppState>,
    Path(lead_id): Path<i32>,
) -> impl IntoResponse {
    match state.leads.get_lead(lead_id).await {
        Ok(lead) => (StatusCode::OK, Json(lead)).into_response(),
        Err(e) => e.into_response(),
    }
}
