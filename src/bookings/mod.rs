//! Booking lifecycle module.
//!
//! Customers submit booking requests for tours; admins list them and move
//! them between pending/confirmed/cancelled.

pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod sanitize;
pub mod service;
pub mod store;

pub use models::{Booking, BookingStatus};
pub use service::BookingService;
pub use store::BookingStore;
