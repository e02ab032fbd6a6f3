//! Request and response bodies shared by the HTTP API.

pub mod api;
pub mod auth;
pub mod booking;
pub mod draft;
pub mod media;
pub mod payment;
pub mod property;
pub mod role_change;
pub mod user;
