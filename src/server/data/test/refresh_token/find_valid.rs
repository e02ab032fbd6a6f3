use super::*;

/// Tests looking up a stored refresh token.
///
/// Expected: Ok(Some(user_id)) until the token is deleted
#[tokio::test]
async fn finds_token_until_revoked() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = RefreshTokenRepository::new(db);
    repo.create(user.id, "token-a", Utc::now() + Duration::days(7))
        .await?;

    assert_eq!(repo.find_valid("token-a").await?, Some(user.id));
    assert!(repo.delete("token-a").await?);
    assert_eq!(repo.find_valid("token-a").await?, None);

    Ok(())
}

/// Tests that expired tokens are not valid and are purged.
///
/// Expected: Ok(None) and one row removed
#[tokio::test]
async fn ignores_and_purges_expired_tokens() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = RefreshTokenRepository::new(db);
    repo.create(user.id, "old", Utc::now() - Duration::minutes(1))
        .await?;
    repo.create(user.id, "fresh", Utc::now() + Duration::days(1))
        .await?;

    assert_eq!(repo.find_valid("old").await?, None);
    assert_eq!(repo.delete_expired().await?, 1);
    assert_eq!(repo.find_valid("fresh").await?, Some(user.id));

    Ok(())
}
