//! Booking domain operations.

use std::sync::Arc;

use crate::auth::AdminAuth;
use crate::error::{AppError, Result};

use super::models::{Booking, BookingStatus, BookingUpdate, NewBooking};
use super::requests::{SubmitBookingRequest, UpdateBookingRequest};
use super::sanitize;
use super::store::{BookingStore, InsertOutcome};

/// Reference code retry bound. The code space is ~10^9, so more than a
/// couple of collisions in a row means something is wrong with the store.
const MAX_REFERENCE_ATTEMPTS: u32 = 20;

/// Result of a successful submission
#[derive(Debug, Clone)]
pub struct SubmittedBooking {
    pub id: i64,
    pub reference_code: String,
}

pub struct BookingService {
    store: Arc<dyn BookingStore>,
    auth: Arc<dyn AdminAuth>,
}

impl BookingService {
    pub fn new(store: Arc<dyn BookingStore>, auth: Arc<dyn AdminAuth>) -> Self {
        Self { store, auth }
    }

    /// Public booking submission.
    ///
    /// Validates required fields and email shape, sanitizes everything
    /// before persistence, and forces the initial status to pending. The
    /// reference code is regenerated on unique-constraint collisions, up to
    /// a bounded number of attempts.
    pub async fn submit(&self, req: SubmitBookingRequest) -> Result<SubmittedBooking> {
        let tour_id = req.tour_id.filter(|id| *id > 0).ok_or(AppError::MissingFields)?;
        let name = required(req.name)?;
        let email = required(req.email)?;
        let phone = required(req.phone)?;
        let contact_method = required(req.contact_method)?;

        if !sanitize::is_valid_email(&email) {
            return Err(AppError::InvalidEmail);
        }

        let mut booking = NewBooking {
            reference_code: sanitize::generate_reference_code(),
            tour_id,
            user_id: req.user_id.filter(|id| !id.is_empty()),
            name: sanitize::truncate(&name, sanitize::MAX_NAME_LEN),
            email: sanitize::truncate(&email, sanitize::MAX_EMAIL_LEN),
            phone: sanitize::truncate(&phone, sanitize::MAX_PHONE_LEN),
            contact_method,
            message: req
                .message
                .map(|m| sanitize::truncate(&m, sanitize::MAX_MESSAGE_LEN))
                .unwrap_or_default(),
            guests: sanitize::coerce_guests(req.guests.as_ref()),
            total_price: sanitize::coerce_total_price(req.total_price.as_ref()),
        };

        for attempt in 1..=MAX_REFERENCE_ATTEMPTS {
            match self.store.insert(&booking).await? {
                InsertOutcome::Created { id } => {
                    tracing::info!(
                        booking_id = id,
                        reference = %booking.reference_code,
                        tour_id,
                        "Booking submitted"
                    );
                    return Ok(SubmittedBooking {
                        id,
                        reference_code: booking.reference_code,
                    });
                }
                InsertOutcome::DuplicateReference => {
                    tracing::warn!(
                        attempt,
                        reference = %booking.reference_code,
                        "Reference code collision, regenerating"
                    );
                    booking.reference_code = sanitize::generate_reference_code();
                }
            }
        }

        Err(AppError::ReferenceCodeExhausted)
    }

    /// Admin listing, newest first.
    pub async fn list_all(&self, session: Option<&str>) -> Result<Vec<Booking>> {
        self.require_admin(session).await?;
        self.store.list_all().await
    }

    /// Admin status/note update. Only provided fields change; an empty
    /// status string counts as absent, an empty admin note overwrites.
    pub async fn update(&self, session: Option<&str>, req: UpdateBookingRequest) -> Result<()> {
        self.require_admin(session).await?;

        if req.id < 1 {
            return Err(AppError::MissingId);
        }

        let status = req.status.filter(|s| !s.is_empty());
        if status.is_none() && req.admin_note.is_none() {
            return Err(AppError::NoUpdateData);
        }

        let status = match status {
            Some(value) => {
                Some(BookingStatus::parse(&value).ok_or(AppError::InvalidStatus)?)
            }
            None => None,
        };

        let update = BookingUpdate {
            status,
            admin_note: req
                .admin_note
                .map(|note| sanitize::truncate(&note, sanitize::MAX_ADMIN_NOTE_LEN)),
        };

        self.store.update(req.id, &update).await
    }

    async fn require_admin(&self, session: Option<&str>) -> Result<()> {
        if self.auth.is_authenticated(session).await? {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }
}

fn required(value: Option<String>) -> Result<String> {
    value.filter(|v| !v.is_empty()).ok_or(AppError::MissingFields)
}
