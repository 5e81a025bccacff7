//! Admin session guard.
//!
//! Admin-only operations take the session token as an injected capability
//! check (`AdminAuth`) rather than reading cookies themselves, so the
//! domain services can be exercised without a session backend.

use async_trait::async_trait;
use axum::http::{header, HeaderMap};
use chrono::{DateTime, Utc};

use crate::error::Result;

pub mod mock;
pub mod password;
pub mod routes;
pub mod session;

pub use session::PgAdminAuth;

/// Session cookie name, shared with the admin UI.
pub const SESSION_COOKIE: &str = "goholiday_session";

/// Sessions live for one week.
pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7;

/// A session established by a successful login.
#[derive(Debug, Clone)]
pub struct EstablishedSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[async_trait]
pub trait AdminAuth: Send + Sync {
    /// Whether the presented token belongs to a live admin session.
    async fn is_authenticated(&self, token: Option<&str>) -> Result<bool>;

    /// Verify credentials and establish a session. Returns `None` on bad
    /// credentials; unknown email and wrong password are indistinguishable.
    async fn login(&self, email: &str, password: &str) -> Result<Option<EstablishedSession>>;

    /// Destroy the session behind the token.
    async fn logout(&self, token: &str) -> Result<()>;
}

/// Extract the admin session token from the request's Cookie header.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_session_token_parsed_from_cookie_header() {
        let headers = headers_with_cookie("goholiday_session=abc123");
        assert_eq!(session_token(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_session_token_found_among_other_cookies() {
        let headers =
            headers_with_cookie("lang=th; goholiday_session=tok-42; theme=dark");
        assert_eq!(session_token(&headers).as_deref(), Some("tok-42"));
    }

    #[test]
    fn test_session_token_absent() {
        assert_eq!(session_token(&HeaderMap::new()), None);
        let headers = headers_with_cookie("lang=th; theme=dark");
        assert_eq!(session_token(&headers), None);
    }
}
