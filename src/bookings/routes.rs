//! Booking route handlers

use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::auth::session_token;
use crate::error::{AppError, Result};
use crate::ratelimit::client_ip;
use crate::AppState;

use super::requests::{SubmitBookingRequest, UpdateBookingRequest};
use super::responses::{BookingListResponse, SubmitBookingResponse, SuccessResponse};

/// POST /api/bookings (public, rate limited per client IP)
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<SubmitBookingRequest>,
) -> Result<impl IntoResponse> {
    let ip = client_ip(&headers);
    if !state.limiter.check(&ip) {
        tracing::warn!(%ip, "Booking submission rate limited");
        return Err(AppError::RateLimited);
    }

    let created = state.bookings.submit(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitBookingResponse {
            success: true,
            message: "Booking submitted successfully",
            reference_code: created.reference_code,
        }),
    ))
}

/// GET /api/bookings (admin only, returns customer PII)
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<BookingListResponse>> {
    let token = session_token(&headers);
    let bookings = state.bookings.list_all(token.as_deref()).await?;
    Ok(Json(BookingListResponse { bookings }))
}

/// PUT /api/bookings (admin only status/note update)
pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<UpdateBookingRequest>,
) -> Result<Json<SuccessResponse>> {
    let token = session_token(&headers);
    state.bookings.update(token.as_deref(), req).await?;
    Ok(Json(SuccessResponse::ok()))
}
