//! Admin credential bootstrap.

use sqlx::PgPool;

use crate::auth::password;
use crate::error::Result;

/// Create the bootstrap admin account if no row exists for the email.
/// Returns true when a new admin was created.
pub async fn ensure_admin(pool: &PgPool, email: &str, plain_password: &str) -> Result<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM admins WHERE email = $1)")
        .bind(email)
        .fetch_one(pool)
        .await?;

    if exists {
        return Ok(false);
    }

    let password_hash = password::hash_password(plain_password)?;

    let result = sqlx::query(
        "INSERT INTO admins (email, password_hash) VALUES ($1, $2) ON CONFLICT (email) DO NOTHING",
    )
    .bind(email)
    .bind(password_hash)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
