//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through
//! Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - JWT keys for issuing and verifying access and refresh tokens
//! - Media store rooted at the public directory
//! - Whether publishing a draft deletes media it dropped

use sea_orm::DatabaseConnection;

use crate::server::{service::auth::token::JwtKeys, storage::MediaStore};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the connection is a pool handle, the keys and the
/// media store hold their data behind `Arc`s.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Signing and verification keys for access and refresh tokens.
    pub jwt: JwtKeys,

    /// Disk-backed store for uploaded images, videos and PDFs.
    pub media: MediaStore,

    /// When set, publishing a draft deletes media no longer referenced by the property.
    pub media_cleanup_on_publish: bool,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt` - Token keys built from the configured secrets
    /// - `media` - Media store rooted at the public directory
    /// - `media_cleanup_on_publish` - Whether publish removes orphaned media
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        jwt: JwtKeys,
        media: MediaStore,
        media_cleanup_on_publish: bool,
    ) -> Self {
        Self {
            db,
            jwt,
            media,
            media_cleanup_on_publish,
        }
    }
}
