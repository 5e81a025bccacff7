//! Test double for the admin session guard.

use async_trait::async_trait;
use chrono::Utc;

use crate::error::Result;

use super::{AdminAuth, EstablishedSession, SESSION_TTL_SECS};

/// Guard with a fixed answer: either every presented token is a live admin
/// session, or none is.
pub struct MockAdminAuth {
    authenticated: bool,
}

impl MockAdminAuth {
    pub fn new(authenticated: bool) -> Self {
        Self { authenticated }
    }
}

#[async_trait]
impl AdminAuth for MockAdminAuth {
    async fn is_authenticated(&self, token: Option<&str>) -> Result<bool> {
        Ok(self.authenticated && token.is_some())
    }

    async fn login(&self, _email: &str, _password: &str) -> Result<Option<EstablishedSession>> {
        Ok(self.authenticated.then(|| EstablishedSession {
            token: "mock-session-token".to_string(),
            expires_at: Utc::now() + chrono::Duration::seconds(SESSION_TTL_SECS),
        }))
    }

    async fn logout(&self, _token: &str) -> Result<()> {
        Ok(())
    }
}
