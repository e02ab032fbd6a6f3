use crate::server::model::user::User;

mod auth;
mod booking;
mod payment;
mod role_change;
mod user;

/// Converts a factory-created row into the domain user services expect.
fn as_user(model: entity::user::Model) -> User {
    User::from_entity(model).unwrap()
}
