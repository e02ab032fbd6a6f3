//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models, decoding
//! JSON sub-document columns at this boundary. All queries, inserts, updates and deletes
//! go through these repositories.

pub mod booking;
pub mod payment;
pub mod draft;
pub mod property;
pub mod refresh_token;
pub mod role_change;
pub mod user;

#[cfg(test)]
mod test;
