//! Admin auth route handlers

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::error::Result;
use crate::AppState;

use super::{session_token, SESSION_COOKIE, SESSION_TTL_SECS};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Response> {
    match state.auth.login(&req.email, &req.password).await? {
        Some(session) => {
            let mut headers = HeaderMap::new();
            headers.insert(
                header::SET_COOKIE,
                session_cookie(&session.token, SESSION_TTL_SECS),
            );
            Ok((headers, Json(serde_json::json!({ "success": true }))).into_response())
        }
        None => Ok((
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "error": "Invalid credentials" })),
        )
            .into_response()),
    }
}

/// POST /api/auth/logout
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Result<Response> {
    if let Some(token) = session_token(&headers) {
        state.auth.logout(&token).await?;
    }

    let mut response_headers = HeaderMap::new();
    response_headers.insert(header::SET_COOKIE, session_cookie("", 0));
    Ok((response_headers, Json(serde_json::json!({ "success": true }))).into_response())
}

/// GET /api/auth/session, the admin UI's redirect probe
pub async fn session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>> {
    let token = session_token(&headers);
    let authenticated = state.auth.is_authenticated(token.as_deref()).await?;
    Ok(Json(serde_json::json!({ "authenticated": authenticated })))
}

fn session_cookie(token: &str, max_age: i64) -> HeaderValue {
    let cookie =
        format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Strict; Max-Age={max_age}");
    HeaderValue::from_str(&cookie).expect("session cookie is always valid ASCII")
}
