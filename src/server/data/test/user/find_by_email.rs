use super::*;

/// Tests finding a user by email.
///
/// Expected: Ok(Some) for a stored email, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("host@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("host@example.com").await?;
    let missing = repo.find_by_email("nobody@example.com").await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));
    assert!(missing.is_none());

    Ok(())
}

/// Tests that the active lookup skips deactivated accounts.
///
/// Expected: Ok(None) for an inactive user, Ok(Some) for an active one
#[tokio::test]
async fn active_lookup_skips_inactive_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::user::UserFactory::new(db)
        .email("active@example.com")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .email("gone@example.com")
        .is_active(false)
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert_eq!(
        repo.find_active_by_email("active@example.com")
            .await?
            .map(|u| u.id),
        Some(active.id)
    );
    assert!(repo
        .find_active_by_email("gone@example.com")
        .await?
        .is_none());

    Ok(())
}
