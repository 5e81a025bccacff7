//! GoHoliday booking and announcements backend.
//!
//! Serves the public booking submission flow and the admin back-office
//! operations (booking status management, announcement targeting) as a
//! JSON API over PostgreSQL. Page rendering, tour CRUD and translation
//! providers live elsewhere; this service owns the booking lifecycle and
//! the single-active-per-type announcement rule.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod announcements;
pub mod auth;
pub mod bookings;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod ratelimit;
pub mod translate;

use announcements::AnnouncementService;
use auth::AdminAuth;
use bookings::BookingService;
use cache::AppCache;
use ratelimit::RateLimiter;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub bookings: Arc<BookingService>,
    pub announcements: Arc<AnnouncementService>,
    pub auth: Arc<dyn AdminAuth>,
    pub limiter: Arc<RateLimiter>,
    pub cache: AppCache,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(
            "/api/bookings",
            post(bookings::routes::submit)
                .get(bookings::routes::list)
                .put(bookings::routes::update),
        )
        .route("/api/announcements", get(announcements::routes::list))
        .route("/api/announcements/active", get(announcements::routes::active))
        .route("/api/announcements/create", post(announcements::routes::create))
        .route("/api/announcements/toggle", post(announcements::routes::toggle))
        .route("/api/announcements/delete", post(announcements::routes::delete))
        .route("/api/auth/login", post(auth::routes::login))
        .route("/api/auth/logout", post(auth::routes::logout))
        .route("/api/auth/session", get(auth::routes::session))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn healthz(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "cache": state.cache.stats(),
    }))
}
