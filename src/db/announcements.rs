//! PostgreSQL announcement store.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::announcements::models::{Announcement, DisplayType, NewAnnouncement};
use crate::announcements::store::AnnouncementStore;
use crate::error::Result;

const ANNOUNCEMENT_COLUMNS: &str = r#"
    id, message, message_en, message_th, message_zh, type, popup_type,
    image_url, is_active, discount_tour_id, discount_percentage, created_at
"#;

pub struct PgAnnouncementStore {
    pool: PgPool,
}

impl PgAnnouncementStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnnouncementStore for PgAnnouncementStore {
    async fn insert(&self, announcement: &NewAnnouncement) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO announcements
                (message, message_en, message_th, message_zh, type, popup_type,
                 image_url, is_active, discount_tour_id, discount_percentage)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(&announcement.message)
        .bind(&announcement.message_en)
        .bind(&announcement.message_th)
        .bind(&announcement.message_zh)
        .bind(announcement.kind.as_str())
        .bind(announcement.popup_type.as_str())
        .bind(&announcement.image_url)
        .bind(announcement.is_active)
        .bind(announcement.discount_tour_id)
        .bind(announcement.discount_percentage)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<Announcement>> {
        let announcements = sqlx::query_as::<_, Announcement>(&format!(
            "SELECT {ANNOUNCEMENT_COLUMNS} FROM announcements ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(announcements)
    }

    async fn set_active_exclusive(&self, id: i64) -> Result<bool> {
        // One conditional UPDATE covers the whole display type: the target
        // becomes active, every sibling goes inactive, and no statement
        // boundary exists where a reader could see two active rows.
        let result = sqlx::query(
            r#"
            UPDATE announcements
            SET is_active = (id = $1)
            WHERE type = (SELECT type FROM announcements WHERE id = $1)
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_inactive(&self, id: i64) -> Result<()> {
        sqlx::query("UPDATE announcements SET is_active = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn active_by_type(&self, kind: DisplayType) -> Result<Option<Announcement>> {
        let announcement = sqlx::query_as::<_, Announcement>(&format!(
            r#"
            SELECT {ANNOUNCEMENT_COLUMNS} FROM announcements
            WHERE type = $1 AND is_active
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            "#
        ))
        .bind(kind.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(announcement)
    }
}
