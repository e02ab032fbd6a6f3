use super::*;

/// Tests logging in with the registered password.
///
/// Expected: Ok with last_login recorded
#[tokio::test]
async fn logs_in_with_correct_password() -> Result<(), AppError> {
    let test = auth_db().await;
    let db = test.db.as_ref().unwrap();
    let jwt = keys();

    let service = AuthService::new(db, &jwt);
    service.register(params("ana@example.com")).await?;
    let tokens = service.login("ana@example.com", "correct horse").await?;

    assert!(tokens.user.last_login.is_some());

    Ok(())
}

/// Tests that a wrong password and an unknown email fail the same way.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = auth_db().await;
    let db = test.db.as_ref().unwrap();
    let jwt = keys();

    let service = AuthService::new(db, &jwt);
    service.register(params("ana@example.com")).await?;

    assert!(matches!(
        service.login("ana@example.com", "wrong").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        service.login("nobody@example.com", "correct horse").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that a deactivated account cannot log in.
///
/// Expected: Err(AuthError::UserInactive)
#[tokio::test]
async fn rejects_inactive_user() -> Result<(), AppError> {
    let test = auth_db().await;
    let db = test.db.as_ref().unwrap();
    let jwt = keys();

    let service = AuthService::new(db, &jwt);
    let tokens = service.register(params("ana@example.com")).await?;
    crate::server::data::user::UserRepository::new(db)
        .set_active(tokens.user.id, false)
        .await?;

    let result = service.login("ana@example.com", "correct horse").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserInactive(_)))
    ));

    Ok(())
}
