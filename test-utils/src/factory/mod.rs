//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories insert
//! rows directly through the entity models, so they work on any `TestBuilder` schema that
//! contains the required tables.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let host = factory::user::create_host(&db).await?;
//!     let property = factory::property::create_property(&db, host.id).await?;
//!
//!     // Create with all dependencies
//!     let (host, property) = factory::helpers::create_property_with_host(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let property = factory::property::PropertyFactory::new(&db, host.id)
//!     .title("Beach house")
//!     .price_per_night(150.0)
//!     .photos(serde_json::json!([{ "url": "/images/a.jpg" }]))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities with a given role
//! - `property` - Create property entities owned by a host
//! - `draft` - Create property drafts, linked or unlinked
//! - `booking` - Create bookings of a property
//! - `payment` - Create payments made by a user
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod booking;
pub mod draft;
pub mod helpers;
pub mod payment;
pub mod property;
pub mod user;

pub use booking::create_booking;
pub use draft::create_draft;
pub use payment::create_payment;
pub use property::create_property;
pub use user::{create_admin, create_host, create_user};
