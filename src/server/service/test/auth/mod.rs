use crate::server::{
    error::{auth::AuthError, AppError},
    service::auth::{token::JwtKeys, AuthService, RegisterParams},
};
use test_utils::builder::TestBuilder;

mod login;
mod refresh;

fn keys() -> JwtKeys {
    JwtKeys::new("test-access-secret", "test-refresh-secret")
}

fn params(email: &str) -> RegisterParams {
    RegisterParams {
        username: "traveler".to_string(),
        email: email.to_string(),
        password: "correct horse".to_string(),
    }
}

async fn auth_db() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::RefreshToken)
        .build()
        .await
        .unwrap()
}
