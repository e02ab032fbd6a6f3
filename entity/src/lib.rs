//! SeaORM entity models for the marketplace tables.
//!
//! Nested sub-documents (addresses, amenities, rooms, media lists, reviews and
//! draft snapshots) are stored as JSON columns and decoded into typed structs
//! at the repository boundary.

pub mod prelude;

pub mod booking;
pub mod payment;
pub mod property;
pub mod property_draft;
pub mod refresh_token;
pub mod role_change_request;
pub mod user;
