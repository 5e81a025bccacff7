//! Database-backed admin sessions.
//!
//! Login issues a random token; only its SHA-256 digest is stored, so a
//! leaked sessions table cannot be replayed. Tokens expire after
//! [`SESSION_TTL_SECS`](super::SESSION_TTL_SECS) and a background task
//! purges expired rows.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use tokio::time::interval;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::Result;

use super::password;
use super::{AdminAuth, EstablishedSession, SESSION_TTL_SECS};

/// How often expired sessions are swept out.
const PURGE_INTERVAL: Duration = Duration::from_secs(60 * 60);

pub struct PgAdminAuth {
    pool: PgPool,
}

impl PgAdminAuth {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Delete expired sessions; returns how many were removed.
    pub async fn purge_expired(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE expires_at <= now()")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

fn hash_token(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

#[async_trait]
impl AdminAuth for PgAdminAuth {
    async fn is_authenticated(&self, token: Option<&str>) -> Result<bool> {
        let Some(token) = token else {
            return Ok(false);
        };

        let live: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM admin_sessions
                WHERE token_hash = $1 AND expires_at > now()
            )
            "#,
        )
        .bind(hash_token(token))
        .fetch_one(&self.pool)
        .await?;

        Ok(live)
    }

    async fn login(&self, email: &str, password: &str) -> Result<Option<EstablishedSession>> {
        let row: Option<(i64, String)> =
            sqlx::query_as("SELECT id, password_hash FROM admins WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        let Some((admin_id, stored_hash)) = row else {
            return Ok(None);
        };

        if !password::verify_password(password, &stored_hash)? {
            warn!(email, "Failed admin login attempt");
            return Ok(None);
        }

        let token = Uuid::new_v4().to_string();
        let expires_at = Utc::now() + chrono::Duration::seconds(SESSION_TTL_SECS);

        sqlx::query(
            "INSERT INTO admin_sessions (token_hash, admin_id, expires_at) VALUES ($1, $2, $3)",
        )
        .bind(hash_token(&token))
        .bind(admin_id)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;

        info!(admin_id, "Admin logged in");
        Ok(Some(EstablishedSession { token, expires_at }))
    }

    async fn logout(&self, token: &str) -> Result<()> {
        sqlx::query("DELETE FROM admin_sessions WHERE token_hash = $1")
            .bind(hash_token(token))
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

/// Periodically sweep expired sessions.
pub async fn start_session_purger(auth: Arc<PgAdminAuth>) {
    let mut interval = interval(PURGE_INTERVAL);
    loop {
        interval.tick().await;
        match auth.purge_expired().await {
            Ok(0) => {}
            Ok(purged) => info!(purged, "Expired admin sessions removed"),
            Err(e) => warn!("Session purge failed: {}", e),
        }
    }
}
