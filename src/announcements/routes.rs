//! Announcement route handlers

use axum::{extract::State, http::HeaderMap, Json};

use crate::auth::session_token;
use crate::bookings::responses::SuccessResponse;
use crate::error::Result;
use crate::AppState;

use super::requests::{
    CreateAnnouncementRequest, DeleteAnnouncementRequest, ToggleAnnouncementRequest,
};
use super::responses::{ActiveAnnouncements, AnnouncementListResponse};

/// POST /api/announcements/create (admin only)
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateAnnouncementRequest>,
) -> Result<Json<SuccessResponse>> {
    let token = session_token(&headers);
    state.announcements.create(token.as_deref(), req).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/announcements/toggle (admin only)
pub async fn toggle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<ToggleAnnouncementRequest>,
) -> Result<Json<SuccessResponse>> {
    let token = session_token(&headers);
    state.announcements.toggle(token.as_deref(), req).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/announcements/delete (admin only)
pub async fn delete(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<DeleteAnnouncementRequest>,
) -> Result<Json<SuccessResponse>> {
    let token = session_token(&headers);
    state.announcements.delete(token.as_deref(), req).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// GET /api/announcements (admin listing)
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AnnouncementListResponse>> {
    let token = session_token(&headers);
    let announcements = state.announcements.list_all(token.as_deref()).await?;
    Ok(Json(AnnouncementListResponse { announcements }))
}

/// GET /api/announcements/active (public visitor resolution)
pub async fn active(State(state): State<AppState>) -> Result<Json<ActiveAnnouncements>> {
    let active = state.announcements.active_for_visitor().await?;
    Ok(Json(active))
}
