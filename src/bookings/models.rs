//! Booking models.
//!
//! Rows use sqlx's FromRow derive for direct database deserialization.
//! Status is stored as TEXT; `BookingStatus` is the validated domain view.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Booking row from the bookings table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: i64,
    pub reference_code: Option<String>,
    pub tour_id: i64,
    pub user_id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub contact_method: String,
    pub message: String,
    pub guests: i32,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_price: Decimal,
    pub status: String,
    pub admin_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated booking status.
///
/// Any status may move to any other status; admins use this to re-open
/// cancelled bookings, so no transition graph is enforced beyond membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    /// Parse a status against the whitelist. Returns `None` for anything
    /// outside the three known values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// The allowed set, for error messages.
    pub fn allowed_values() -> &'static str {
        "pending, confirmed, cancelled"
    }
}

/// Sanitized insert payload. Status is not part of the payload: new bookings
/// always start as pending, whatever the caller supplied.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub reference_code: String,
    pub tour_id: i64,
    pub user_id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub contact_method: String,
    pub message: String,
    pub guests: i32,
    pub total_price: Decimal,
}

/// Partial update applied by an admin. `None` fields keep their prior value.
#[derive(Debug, Clone, Default)]
pub struct BookingUpdate {
    pub status: Option<BookingStatus>,
    pub admin_note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_whitelist() {
        assert_eq!(BookingStatus::parse("pending"), Some(BookingStatus::Pending));
        assert_eq!(
            BookingStatus::parse("confirmed"),
            Some(BookingStatus::Confirmed)
        );
        assert_eq!(
            BookingStatus::parse("cancelled"),
            Some(BookingStatus::Cancelled)
        );
        assert_eq!(BookingStatus::parse("archived"), None);
        assert_eq!(BookingStatus::parse("Pending"), None);
        assert_eq!(BookingStatus::parse(""), None);
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(BookingStatus::parse(status.as_str()), Some(status));
        }
    }
}
