//! Storage seam for announcements.

use async_trait::async_trait;

use crate::error::Result;

use super::models::{Announcement, DisplayType, NewAnnouncement};

#[async_trait]
pub trait AnnouncementStore: Send + Sync {
    async fn insert(&self, announcement: &NewAnnouncement) -> Result<i64>;

    /// All announcements, newest first.
    async fn list_all(&self) -> Result<Vec<Announcement>>;

    /// Activate the given announcement and deactivate every other
    /// announcement of the same display type.
    ///
    /// Implementations must make this atomic: no reader may observe two
    /// active announcements of one type, even under concurrent calls.
    /// Returns false when the id does not resolve to a row.
    async fn set_active_exclusive(&self, id: i64) -> Result<bool>;

    /// Clear the active flag. A no-op for unknown ids.
    async fn set_inactive(&self, id: i64) -> Result<()>;

    /// Hard delete. A no-op for unknown ids.
    async fn delete(&self, id: i64) -> Result<()>;

    /// The currently active announcement of the given type, if any.
    async fn active_by_type(&self, kind: DisplayType) -> Result<Option<Announcement>>;
}
