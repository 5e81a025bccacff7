//! Announcement targeting module.
//!
//! Admins publish banners and popups; at most one announcement per display
//! type is active at any time, and visitors resolve the active pair.

pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod service;
pub mod store;

pub use models::{Announcement, DisplayType, PopupType};
pub use service::AnnouncementService;
pub use store::AnnouncementStore;
