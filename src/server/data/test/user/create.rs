use super::*;

/// Tests creating a user.
///
/// Verifies that new users start active with an unverified email and the requested role.
///
/// Expected: Ok with the created user
#[tokio::test]
async fn creates_active_unverified_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Guest,
        })
        .await?;

    assert_eq!(user.username, "ana");
    assert_eq!(user.role, UserRole::Guest);
    assert!(user.is_active);
    assert!(!user.email_verified);
    assert!(user.last_login.is_none());

    Ok(())
}

/// Tests that email addresses are unique.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let params = CreateUserParams {
        username: "ana".to_string(),
        email: "ana@example.com".to_string(),
        password_hash: "hash".to_string(),
        role: UserRole::Guest,
    };

    repo.create(params.clone()).await?;
    let result = repo.create(params).await;

    assert!(result.is_err());

    Ok(())
}
