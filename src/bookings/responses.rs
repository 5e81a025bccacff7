//! Response DTOs for booking endpoints.

use serde::Serialize;

use super::models::Booking;

/// Response for a successful public submission
#[derive(Debug, Serialize)]
pub struct SubmitBookingResponse {
    pub success: bool,
    pub message: &'static str,
    pub reference_code: String,
}

/// Response for the admin booking listing
#[derive(Debug, Serialize)]
pub struct BookingListResponse {
    pub bookings: Vec<Booking>,
}

/// Generic success acknowledgement
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
