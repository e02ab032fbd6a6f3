use super::*;

/// Tests exchanging a stored refresh token for an access token.
///
/// Expected: Ok with an access token for the same user
#[tokio::test]
async fn refreshes_access_token() -> Result<(), AppError> {
    let test = auth_db().await;
    let db = test.db.as_ref().unwrap();
    let jwt = keys();

    let service = AuthService::new(db, &jwt);
    let tokens = service.register(params("ana@example.com")).await?;
    let access = service.refresh(&tokens.refresh_token).await?;

    assert_eq!(jwt.verify_access(&access)?.sub, tokens.user.id);

    Ok(())
}

/// Tests that a logged-out refresh token no longer works.
///
/// Expected: Err(AuthError::InvalidToken) after logout
#[tokio::test]
async fn rejects_revoked_token() -> Result<(), AppError> {
    let test = auth_db().await;
    let db = test.db.as_ref().unwrap();
    let jwt = keys();

    let service = AuthService::new(db, &jwt);
    let tokens = service.register(params("ana@example.com")).await?;

    assert!(service.logout(&tokens.refresh_token).await?);
    assert!(!service.logout(&tokens.refresh_token).await?);

    let result = service.refresh(&tokens.refresh_token).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests that a validly signed token that was never stored is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_unstored_token() -> Result<(), AppError> {
    let test = auth_db().await;
    let db = test.db.as_ref().unwrap();
    let jwt = keys();

    let tokens = AuthService::new(db, &jwt)
        .register(params("ana@example.com"))
        .await?;
    let (unstored, _) = jwt.issue_refresh(tokens.user.id)?;

    let result = AuthService::new(db, &jwt).refresh(&unstored).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}
