//! Request DTOs for booking endpoints.

use serde::Deserialize;

/// Public booking submission.
///
/// `guests` and `total_price` are accepted as raw JSON values and coerced by
/// `sanitize`; the public form has historically sent both numbers and
/// strings. A caller-supplied `status` is ignored entirely.
#[derive(Debug, Deserialize)]
pub struct SubmitBookingRequest {
    #[serde(default)]
    pub tour_id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub contact_method: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub guests: Option<serde_json::Value>,
    #[serde(default)]
    pub total_price: Option<serde_json::Value>,
}

/// Admin status/note update.
#[derive(Debug, Deserialize)]
pub struct UpdateBookingRequest {
    pub id: i64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub admin_note: Option<String>,
}
