//! In-memory storage backends.
//!
//! Mirror the contracts of the PostgreSQL stores for unit tests and local
//! tooling. Each store keeps its rows under a single mutex; holding the
//! lock across the whole exclusive-activation step is what makes the
//! single-active-per-type rule atomic here, the way the conditional UPDATE
//! is in PostgreSQL.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::announcements::models::{Announcement, DisplayType, NewAnnouncement};
use crate::announcements::store::AnnouncementStore;
use crate::bookings::models::{Booking, BookingUpdate, NewBooking};
use crate::bookings::store::{BookingStore, InsertOutcome};
use crate::error::Result;

pub struct MemoryBookingStore {
    rows: Mutex<Vec<Booking>>,
    next_id: AtomicI64,
}

impl MemoryBookingStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Current rows in insertion order.
    pub fn snapshot(&self) -> Vec<Booking> {
        self.rows.lock().expect("booking store lock poisoned").clone()
    }
}

impl Default for MemoryBookingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn insert(&self, booking: &NewBooking) -> Result<InsertOutcome> {
        let mut rows = self.rows.lock().expect("booking store lock poisoned");

        if rows
            .iter()
            .any(|row| row.reference_code.as_deref() == Some(booking.reference_code.as_str()))
        {
            return Ok(InsertOutcome::DuplicateReference);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        rows.push(Booking {
            id,
            reference_code: Some(booking.reference_code.clone()),
            tour_id: booking.tour_id,
            user_id: booking.user_id.clone(),
            name: booking.name.clone(),
            email: booking.email.clone(),
            phone: booking.phone.clone(),
            contact_method: booking.contact_method.clone(),
            message: booking.message.clone(),
            guests: booking.guests,
            total_price: booking.total_price,
            status: "pending".to_string(),
            admin_note: None,
            created_at: now,
            updated_at: now,
        });

        Ok(InsertOutcome::Created { id })
    }

    async fn list_all(&self) -> Result<Vec<Booking>> {
        let mut rows = self.snapshot();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }

    async fn update(&self, id: i64, update: &BookingUpdate) -> Result<()> {
        let mut rows = self.rows.lock().expect("booking store lock poisoned");

        // Unknown ids are a no-op, matching an UPDATE that affects no rows.
        if let Some(row) = rows.iter_mut().find(|row| row.id == id) {
            if let Some(status) = update.status {
                row.status = status.as_str().to_string();
            }
            if let Some(note) = &update.admin_note {
                row.admin_note = Some(note.clone());
            }
            row.updated_at = Utc::now();
        }

        Ok(())
    }
}

pub struct MemoryAnnouncementStore {
    rows: Mutex<Vec<Announcement>>,
    next_id: AtomicI64,
}

impl MemoryAnnouncementStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Current rows in insertion order.
    pub fn snapshot(&self) -> Vec<Announcement> {
        self.rows
            .lock()
            .expect("announcement store lock poisoned")
            .clone()
    }
}

impl Default for MemoryAnnouncementStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnnouncementStore for MemoryAnnouncementStore {
    async fn insert(&self, announcement: &NewAnnouncement) -> Result<i64> {
        let mut rows = self.rows.lock().expect("announcement store lock poisoned");

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        rows.push(Announcement {
            id,
            message: announcement.message.clone(),
            message_en: Some(announcement.message_en.clone()),
            message_th: Some(announcement.message_th.clone()),
            message_zh: Some(announcement.message_zh.clone()),
            kind: announcement.kind.as_str().to_string(),
            popup_type: announcement.popup_type.as_str().to_string(),
            image_url: announcement.image_url.clone(),
            is_active: announcement.is_active,
            discount_tour_id: announcement.discount_tour_id,
            discount_percentage: announcement.discount_percentage,
            created_at: Utc::now(),
        });

        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<Announcement>> {
        let mut rows = self.snapshot();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }

    async fn set_active_exclusive(&self, id: i64) -> Result<bool> {
        let mut rows = self.rows.lock().expect("announcement store lock poisoned");

        let Some(kind) = rows
            .iter()
            .find(|row| row.id == id)
            .map(|row| row.kind.clone())
        else {
            return Ok(false);
        };

        for row in rows.iter_mut().filter(|row| row.kind == kind) {
            row.is_active = row.id == id;
        }

        Ok(true)
    }

    async fn set_inactive(&self, id: i64) -> Result<()> {
        let mut rows = self.rows.lock().expect("announcement store lock poisoned");
        if let Some(row) = rows.iter_mut().find(|row| row.id == id) {
            row.is_active = false;
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut rows = self.rows.lock().expect("announcement store lock poisoned");
        rows.retain(|row| row.id != id);
        Ok(())
    }

    async fn active_by_type(&self, kind: DisplayType) -> Result<Option<Announcement>> {
        let rows = self.rows.lock().expect("announcement store lock poisoned");
        Ok(rows
            .iter()
            .filter(|row| row.kind == kind.as_str() && row.is_active)
            .max_by_key(|row| row.id)
            .cloned())
    }
}
