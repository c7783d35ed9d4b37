//! Error types for Termas server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes exposed on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    DbFailure = 2,
    NoSuchClient = 3,
    NoSuchBooking = 4,
    NoSuchProduct = 5,
    NoSuchVoucher = 6,
    Duplicate = 7,
    BadValue = 8,
    CapacityMissing = 9,
    CapacityExceeded = 10,
    SlotRestricted = 11,
    VoucherAlreadyUsed = 12,
    NoSuchData = 13,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing entity; the code says which kind
    #[error("Not found: {1}")]
    NotFound(ErrorCode, String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    /// Domain rule violation; the code says which rule
    #[error("{1}")]
    BusinessRule(ErrorCode, String),

    #[error("Capacity is not configured")]
    CapacityMissing,
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(code, msg) => (StatusCode::NOT_FOUND, *code, msg.clone()),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DbFailure,
                    "Database error".to_string(),
                )
            }
            AppError::Conflict(msg) => {
                (StatusCode::CONFLICT, ErrorCode::Duplicate, msg.clone())
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
            AppError::BusinessRule(code, msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, *code, msg.clone())
            }
            AppError::CapacityMissing => (
                StatusCode::BAD_REQUEST,
                ErrorCode::CapacityMissing,
                self.to_string(),
            ),
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
