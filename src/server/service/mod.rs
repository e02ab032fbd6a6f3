//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They apply access rules that depend on the loaded resource (ownership, host or admin),
//! validate input against stored state, and coordinate multi-step operations such as
//! publishing a draft. Services work with domain models, never with entity models.

pub mod auth;
pub mod booking;
pub mod draft;
pub mod payment;
pub mod property;
pub mod review;
pub mod role_change;
pub mod user;

#[cfg(test)]
mod test;
