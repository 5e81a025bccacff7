//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::bookings::models::BookingStatus;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid status. Must be one of: {}", BookingStatus::allowed_values())]
    InvalidStatus,

    #[error("No update data provided (status or admin_note)")]
    NoUpdateData,

    #[error("Message is required")]
    MissingMessage,

    #[error("Missing ID")]
    MissingId,

    #[error("Invalid announcement ID")]
    InvalidId,

    #[error("Discount requires a tour and a percentage between 1 and 99")]
    InvalidDiscount,

    #[error("Unable to allocate a booking reference code")]
    ReferenceCodeExhausted,

    #[error("Translation failed: {0}")]
    TranslationFailed(String),

    #[error("Too many requests. Please try again later.")]
    RateLimited,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Status code and client-facing message for this error.
    ///
    /// Storage and translation failures keep their detail in the server log
    /// and surface a generic message to the client.
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::MissingFields
            | AppError::InvalidEmail
            | AppError::InvalidStatus
            | AppError::NoUpdateData
            | AppError::MissingMessage
            | AppError::MissingId
            | AppError::InvalidId
            | AppError::InvalidDiscount => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, self.to_string()),
            AppError::ReferenceCodeExhausted => {
                tracing::error!("Reference code space exhausted after bounded retries");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to submit booking".to_string(),
                )
            }
            AppError::TranslationFailed(detail) => {
                tracing::error!("Translation error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Translation failed".to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        let body = Json(serde_json::json!({ "error": message }));
        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
