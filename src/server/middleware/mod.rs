//! Request guards applied by controllers.

pub mod auth;
