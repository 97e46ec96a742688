//! Error handling for the lead registration server
//!
//! Provides consistent JSON error responses

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;
use shared::validation::{FieldError, ValidationErrors};

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Boundary errors
    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    // Business rule errors
    #[error("Email already exists")]
    DuplicateEmail { email: String },

    #[error("Lead with id {id} not found")]
    LeadNotFound { id: i32 },

    // Storage errors, passed through unchanged
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateEmail { .. } => StatusCode::CONFLICT,
            AppError::LeadNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Storage(StoreError::Constraint(_)) => StatusCode::CONFLICT,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidRequest(_) => "INVALID_REQUEST",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::DuplicateEmail { .. } => "EMAIL_ALREADY_EXISTS",
            AppError::LeadNotFound { .. } => "NOT_FOUND",
            AppError::Storage(StoreError::Constraint(_)) => "STORAGE_CONFLICT",
            AppError::Storage(_) => "STORAGE_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }

        let error_detail = match &self {
            AppError::Validation(errors) => ErrorDetail {
                code: self.code().to_string(),
                message: "One or more fields are invalid".to_string(),
                details: Some(errors.errors().to_vec()),
            },
            // Storage internals are logged, not returned
            AppError::Storage(StoreError::Constraint(_)) => ErrorDetail {
                code: self.code().to_string(),
                message: "The record conflicts with an existing one".to_string(),
                details: None,
            },
            AppError::Storage(_) => ErrorDetail {
                code: self.code().to_string(),
                message: "A storage error occurred".to_string(),
                details: None,
            },
            _ => ErrorDetail {
                code: self.code().to_string(),
                message: self.to_string(),
                details: None,
            },
        };

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

/// Result type alias for services and handlers
pub type AppResult<T> = Result<T, AppError>;
