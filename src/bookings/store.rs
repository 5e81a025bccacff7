//! Storage seam for bookings.

use async_trait::async_trait;

use crate::error::Result;

use super::models::{Booking, BookingUpdate, NewBooking};

/// Outcome of an insert attempt.
///
/// Reference codes carry a unique constraint; a collision is a normal
/// outcome the service retries with a fresh code, not an error.
#[derive(Debug)]
pub enum InsertOutcome {
    Created { id: i64 },
    DuplicateReference,
}

#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Insert a new booking with status pending.
    async fn insert(&self, booking: &NewBooking) -> Result<InsertOutcome>;

    /// All bookings, newest first.
    async fn list_all(&self) -> Result<Vec<Booking>>;

    /// Apply a partial update and refresh `updated_at`.
    async fn update(&self, id: i64, update: &BookingUpdate) -> Result<()>;
}
