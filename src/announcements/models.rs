//! Announcement models.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Announcement row. The display type column is named `type` in the schema;
/// it is exposed under that name in JSON as well.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Announcement {
    pub id: i64,
    pub message: String,
    pub message_en: Option<String>,
    pub message_th: Option<String>,
    pub message_zh: Option<String>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub popup_type: String,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub discount_tour_id: Option<i64>,
    pub discount_percentage: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// How an announcement is shown to visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayType {
    Banner,
    Popup,
}

impl DisplayType {
    /// Whitelist parse with the source's lenient default: anything outside
    /// the known set becomes a banner.
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value {
            Some("popup") => DisplayType::Popup,
            _ => DisplayType::Banner,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayType::Banner => "banner",
            DisplayType::Popup => "popup",
        }
    }
}

/// Popup sub-category, only meaningful when the display type is popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    Discount,
    NewFeature,
    SystemUpdate,
    General,
}

impl PopupType {
    /// Whitelist parse defaulting to general.
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value {
            Some("discount") => PopupType::Discount,
            Some("new_feature") => PopupType::NewFeature,
            Some("system_update") => PopupType::SystemUpdate,
            _ => PopupType::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PopupType::Discount => "discount",
            PopupType::NewFeature => "new_feature",
            PopupType::SystemUpdate => "system_update",
            PopupType::General => "general",
        }
    }
}

/// Insert payload with translated message variants already resolved.
#[derive(Debug, Clone)]
pub struct NewAnnouncement {
    pub message: String,
    pub message_en: String,
    pub message_th: String,
    pub message_zh: String,
    pub kind: DisplayType,
    pub popup_type: PopupType,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub discount_tour_id: Option<i64>,
    pub discount_percentage: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_type_defaults_to_banner() {
        assert_eq!(DisplayType::parse_or_default(None), DisplayType::Banner);
        assert_eq!(
            DisplayType::parse_or_default(Some("marquee")),
            DisplayType::Banner
        );
        assert_eq!(DisplayType::parse_or_default(Some("")), DisplayType::Banner);
        assert_eq!(
            DisplayType::parse_or_default(Some("popup")),
            DisplayType::Popup
        );
        assert_eq!(
            DisplayType::parse_or_default(Some("banner")),
            DisplayType::Banner
        );
    }

    #[test]
    fn test_popup_type_defaults_to_general() {
        assert_eq!(PopupType::parse_or_default(None), PopupType::General);
        assert_eq!(
            PopupType::parse_or_default(Some("flash_sale")),
            PopupType::General
        );
        assert_eq!(
            PopupType::parse_or_default(Some("discount")),
            PopupType::Discount
        );
        assert_eq!(
            PopupType::parse_or_default(Some("new_feature")),
            PopupType::NewFeature
        );
        assert_eq!(
            PopupType::parse_or_default(Some("system_update")),
            PopupType::SystemUpdate
        );
    }
}
