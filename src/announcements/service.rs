//! Announcement domain operations.

use std::sync::Arc;

use crate::auth::AdminAuth;
use crate::cache::AppCache;
use crate::error::{AppError, Result};
use crate::translate::Translator;

use super::models::{Announcement, DisplayType, NewAnnouncement, PopupType};
use super::requests::{
    CreateAnnouncementRequest, DeleteAnnouncementRequest, ToggleAnnouncementRequest,
};
use super::responses::ActiveAnnouncements;
use super::store::AnnouncementStore;

const MIN_DISCOUNT_PCT: f64 = 1.0;
const MAX_DISCOUNT_PCT: f64 = 99.0;

pub struct AnnouncementService {
    store: Arc<dyn AnnouncementStore>,
    auth: Arc<dyn AdminAuth>,
    translator: Arc<dyn Translator>,
    cache: AppCache,
}

impl AnnouncementService {
    pub fn new(
        store: Arc<dyn AnnouncementStore>,
        auth: Arc<dyn AdminAuth>,
        translator: Arc<dyn Translator>,
        cache: AppCache,
    ) -> Self {
        Self {
            store,
            auth,
            translator,
            cache,
        }
    }

    /// Create an announcement.
    ///
    /// Display type and popup sub-category are whitelisted with silent
    /// defaults. Discount popups must carry a tour and a percentage in
    /// 1..=99. The message is translated before anything is persisted; a
    /// translation failure aborts the create.
    pub async fn create(
        &self,
        session: Option<&str>,
        req: CreateAnnouncementRequest,
    ) -> Result<i64> {
        self.require_admin(session).await?;

        let message = req
            .message
            .filter(|m| !m.is_empty())
            .ok_or(AppError::MissingMessage)?;

        let kind = DisplayType::parse_or_default(req.kind.as_deref());
        let popup_type = match kind {
            DisplayType::Popup => PopupType::parse_or_default(req.popup_type.as_deref()),
            DisplayType::Banner => PopupType::General,
        };

        let (discount_tour_id, discount_percentage) = if popup_type == PopupType::Discount {
            let tour_id = req
                .discount_tour_id
                .filter(|id| *id > 0)
                .ok_or(AppError::InvalidDiscount)?;
            let pct = req.discount_percentage.ok_or(AppError::InvalidDiscount)?;
            if !(MIN_DISCOUNT_PCT..=MAX_DISCOUNT_PCT).contains(&pct) {
                return Err(AppError::InvalidDiscount);
            }
            (Some(tour_id), Some(pct))
        } else {
            (None, None)
        };

        // Fail-closed: nothing is written unless every language came back.
        let translations = self.translator.translate_announcement_message(&message).await?;

        let announcement = NewAnnouncement {
            message: translations.message_en.clone(),
            message_en: translations.message_en,
            message_th: translations.message_th,
            message_zh: translations.message_zh,
            kind,
            popup_type,
            image_url: req.image_url.filter(|url| !url.is_empty()),
            // Inserted inactive even when activation was requested; the
            // exclusive activation below is the only path that sets the
            // flag, so one type never holds two active rows, transiently
            // or otherwise.
            is_active: false,
            discount_tour_id,
            discount_percentage,
        };

        let id = self.store.insert(&announcement).await?;
        if req.is_active {
            self.store.set_active_exclusive(id).await?;
        }
        self.cache.invalidate_announcements();
        tracing::info!(announcement_id = id, kind = kind.as_str(), "Announcement created");
        Ok(id)
    }

    /// Flip the active flag.
    ///
    /// Activation deactivates every other announcement of the same display
    /// type in one atomic storage operation; deactivation has no cascade.
    pub async fn toggle(
        &self,
        session: Option<&str>,
        req: ToggleAnnouncementRequest,
    ) -> Result<()> {
        self.require_admin(session).await?;

        if req.id < 1 {
            return Err(AppError::InvalidId);
        }

        if req.is_active {
            if !self.store.set_active_exclusive(req.id).await? {
                return Err(AppError::InvalidId);
            }
        } else {
            self.store.set_inactive(req.id).await?;
        }

        self.cache.invalidate_announcements();
        Ok(())
    }

    /// Hard delete.
    pub async fn delete(
        &self,
        session: Option<&str>,
        req: DeleteAnnouncementRequest,
    ) -> Result<()> {
        self.require_admin(session).await?;

        if req.id < 1 {
            return Err(AppError::InvalidId);
        }

        self.store.delete(req.id).await?;
        self.cache.invalidate_announcements();
        Ok(())
    }

    /// Admin listing, newest first.
    pub async fn list_all(&self, session: Option<&str>) -> Result<Vec<Announcement>> {
        self.require_admin(session).await?;
        self.store.list_all().await
    }

    /// The active announcement per display type, for site visitors.
    pub async fn active_for_visitor(&self) -> Result<ActiveAnnouncements> {
        if let Some(cached) = self.cache.get_active_announcements().await {
            return Ok((*cached).clone());
        }

        let active = ActiveAnnouncements {
            banner: self.store.active_by_type(DisplayType::Banner).await?,
            popup: self.store.active_by_type(DisplayType::Popup).await?,
        };
        self.cache.put_active_announcements(active.clone()).await;
        Ok(active)
    }

    async fn require_admin(&self, session: Option<&str>) -> Result<()> {
        if self.auth.is_authenticated(session).await? {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }
}
