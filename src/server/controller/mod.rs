//! HTTP request handlers.
//!
//! Controllers authenticate the caller through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! hand DTOs to the service layer and convert the returned domain models back into DTOs.

pub mod auth;
pub mod booking;
pub mod draft;
pub mod file;
pub mod payment;
pub mod property;
pub mod role_change;
pub mod user;
