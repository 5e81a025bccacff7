//! Response DTOs for announcement endpoints.

use serde::Serialize;

use super::models::Announcement;

/// Response for the admin announcement listing
#[derive(Debug, Serialize)]
pub struct AnnouncementListResponse {
    pub announcements: Vec<Announcement>,
}

/// The active announcement per display type, at most one each
#[derive(Debug, Clone, Serialize)]
pub struct ActiveAnnouncements {
    pub banner: Option<Announcement>,
    pub popup: Option<Announcement>,
}
