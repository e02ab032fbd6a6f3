use crate::{
    model::user::SendNotificationDto,
    server::{error::AppError, service::user::UserService},
};
use test_utils::{builder::TestBuilder, factory};

use super::as_user;

mod get_by_role;
mod notifications;

fn notice(kind: &str) -> SendNotificationDto {
    SendNotificationDto {
        kind: kind.to_string(),
        title: Some("Heads up".to_string()),
        message: Some("Something happened".to_string()),
        ..Default::default()
    }
}
