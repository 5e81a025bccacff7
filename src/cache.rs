//! In-memory caching using moka
//!
//! The visitor-facing active-announcement lookup runs on every page load,
//! while announcements change a few times a week at most. A short TTL plus
//! explicit invalidation on every announcement mutation keeps the pair hot
//! without ever serving a stale activation.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::announcements::responses::ActiveAnnouncements;

const ACTIVE_KEY: &str = "active";

/// Application cache holding the resolved active-announcement pair
#[derive(Clone)]
pub struct AppCache {
    active_announcements: Cache<&'static str, Arc<ActiveAnnouncements>>,
}

impl AppCache {
    /// Create a new cache instance with configured TTLs
    pub fn new() -> Self {
        Self {
            // One entry (the banner/popup pair), 60s TTL as a backstop;
            // mutations invalidate eagerly.
            active_announcements: Cache::builder()
                .max_capacity(1)
                .time_to_live(Duration::from_secs(60))
                .build(),
        }
    }

    pub async fn get_active_announcements(&self) -> Option<Arc<ActiveAnnouncements>> {
        self.active_announcements.get(&ACTIVE_KEY).await
    }

    pub async fn put_active_announcements(&self, active: ActiveAnnouncements) {
        self.active_announcements
            .insert(ACTIVE_KEY, Arc::new(active))
            .await;
    }

    /// Drop the cached pair after any announcement mutation.
    pub fn invalidate_announcements(&self) {
        self.active_announcements.invalidate_all();
        debug!("Active announcement cache invalidated");
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            active_announcements_cached: self.active_announcements.entry_count() > 0,
        }
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics for the health endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub active_announcements_cached: bool,
}
