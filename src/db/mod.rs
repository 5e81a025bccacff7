//! Database access layer: pool setup, migrations, and the storage backends.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::error::{AppError, Result};

pub mod admins;
pub mod announcements;
pub mod bookings;
pub mod memory;

pub use announcements::PgAnnouncementStore;
pub use bookings::PgBookingStore;

/// Connect to PostgreSQL.
pub async fn connect(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Apply pending migrations from `./migrations`.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| AppError::Internal(format!("migration failed: {e}")))
}
