//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary (where JSON
//! columns are decoded into typed sub-documents) and transformed to DTOs at the controller
//! boundary. Parameter types carry validated input for create and update operations.

pub mod booking;
pub mod draft;
pub mod media;
pub mod payment;
pub mod property;
pub mod role_change;
pub mod user;

use sea_orm::DbErr;
use serde::de::DeserializeOwned;

/// Decodes a JSON column into its typed sub-document.
pub(crate) fn decode_json<T: DeserializeOwned>(
    column: &str,
    value: serde_json::Value,
) -> Result<T, DbErr> {
    serde_json::from_value(value)
        .map_err(|e| DbErr::Json(format!("Failed to decode {}: {}", column, e)))
}

/// Encodes a typed sub-document for storage in a JSON column.
pub(crate) fn encode_json<T: serde::Serialize>(
    column: &str,
    value: &T,
) -> Result<serde_json::Value, DbErr> {
    serde_json::to_value(value)
        .map_err(|e| DbErr::Json(format!("Failed to encode {}: {}", column, e)))
}
