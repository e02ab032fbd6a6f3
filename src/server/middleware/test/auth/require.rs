use super::*;

/// Tests that a request without a bearer token is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = keys();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests that a token signed with another secret is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let foreign = JwtKeys::new("other-secret", "other-refresh").issue_access(user.id, 2, "x")?;
    let jwt = keys();
    let headers = bearer(&foreign);

    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests authenticating an active user without permissions.
///
/// Expected: Ok(User)
#[tokio::test]
async fn returns_authenticated_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let jwt = keys();
    let headers = bearer(&jwt.issue_access(user.id, user.role, &user.username)?);

    let authenticated = AuthGuard::new(db, &jwt, &headers).require(&[]).await?;

    assert_eq!(authenticated.id, user.id);

    Ok(())
}

/// Tests that deactivated users cannot authenticate.
///
/// Expected: Err(AuthError::UserInactive)
#[tokio::test]
async fn rejects_inactive_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::UserFactory::new(db)
        .is_active(false)
        .build()
        .await?;

    let jwt = keys();
    let headers = bearer(&jwt.issue_access(user.id, user.role, &user.username)?);

    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserInactive(_)))
    ));

    Ok(())
}

/// Tests that a token for a deleted user is rejected.
///
/// Expected: Err(AuthError::UserNotFound)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let jwt = keys();
    let headers = bearer(&jwt.issue_access(999, 0, "ghost")?);

    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(999)))
    ));

    Ok(())
}

/// Tests the host permission.
///
/// Verifies that guests are denied while hosts and admins pass.
///
/// Expected: Err(AccessDenied) for a guest, Ok for host and admin
#[tokio::test]
async fn host_permission_admits_hosts_and_admins() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guest = factory::create_user(db).await?;
    let host = factory::create_host(db).await?;
    let admin = factory::create_admin(db).await?;
    let jwt = keys();

    let guest_headers = bearer(&jwt.issue_access(guest.id, guest.role, &guest.username)?);
    let result = AuthGuard::new(db, &jwt, &guest_headers)
        .require(&[Permission::Host])
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));

    for user in [host, admin] {
        let headers = bearer(&jwt.issue_access(user.id, user.role, &user.username)?);
        let authenticated = AuthGuard::new(db, &jwt, &headers)
            .require(&[Permission::Host])
            .await?;
        assert_eq!(authenticated.id, user.id);
    }

    Ok(())
}

/// Tests the admin permission.
///
/// Verifies that the role is read from the database, not from the token claims.
///
/// Expected: Err(AccessDenied) for a host whose token claims admin
#[tokio::test]
async fn admin_permission_uses_stored_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let host = factory::create_host(db).await?;
    let jwt = keys();

    let headers = bearer(&jwt.issue_access(host.id, 0, &host.username)?);
    let result = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));

    Ok(())
}
