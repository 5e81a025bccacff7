//! PostgreSQL booking store.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::bookings::models::{Booking, BookingUpdate, NewBooking};
use crate::bookings::store::{BookingStore, InsertOutcome};
use crate::error::Result;

pub struct PgBookingStore {
    pool: PgPool,
}

impl PgBookingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn insert(&self, booking: &NewBooking) -> Result<InsertOutcome> {
        // Status is deliberately left to its column default of 'pending'.
        let inserted = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO bookings
                (reference_code, tour_id, user_id, name, email, phone,
                 contact_method, message, guests, total_price)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(&booking.reference_code)
        .bind(booking.tour_id)
        .bind(&booking.user_id)
        .bind(&booking.name)
        .bind(&booking.email)
        .bind(&booking.phone)
        .bind(&booking.contact_method)
        .bind(&booking.message)
        .bind(booking.guests)
        .bind(booking.total_price)
        .fetch_one(&self.pool)
        .await;

        match inserted {
            Ok(id) => Ok(InsertOutcome::Created { id }),
            Err(sqlx::Error::Database(db))
                if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation)
                    && db.constraint().is_some_and(|c| c.contains("reference_code")) =>
            {
                Ok(InsertOutcome::DuplicateReference)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list_all(&self) -> Result<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT
                id, reference_code, tour_id, user_id, name, email, phone,
                contact_method, message, guests, total_price, status,
                admin_note, created_at, updated_at
            FROM bookings
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    async fn update(&self, id: i64, update: &BookingUpdate) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE bookings
            SET status = COALESCE($2, status),
                admin_note = COALESCE($3, admin_note),
                updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(update.status.map(|s| s.as_str()))
        .bind(&update.admin_note)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
