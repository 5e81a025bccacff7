//! Request DTOs for announcement endpoints.

use serde::Deserialize;

/// Admin announcement creation.
///
/// `type` and `popup_type` are whitelisted with silent defaults, so they
/// arrive as plain strings rather than enums.
#[derive(Debug, Deserialize)]
pub struct CreateAnnouncementRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub popup_type: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub discount_tour_id: Option<i64>,
    #[serde(default)]
    pub discount_percentage: Option<f64>,
}

/// Admin activation toggle.
#[derive(Debug, Deserialize)]
pub struct ToggleAnnouncementRequest {
    pub id: i64,
    #[serde(default)]
    pub is_active: bool,
}

/// Admin hard delete.
#[derive(Debug, Deserialize)]
pub struct DeleteAnnouncementRequest {
    pub id: i64,
}
