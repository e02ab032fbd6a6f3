use super::*;

/// Tests applying a partial profile update.
///
/// Verifies that supplied fields change and omitted fields keep their value.
///
/// Expected: Ok with the updated user
#[tokio::test]
async fn updates_supplied_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(UpdateUserParams {
            id: user.id,
            first_name: Some("Ana".to_string()),
            language: Some("es".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.first_name.as_deref(), Some("Ana"));
    assert_eq!(updated.language.as_deref(), Some("es"));
    assert_eq!(updated.username, user.username);
    assert_eq!(updated.email, user.email);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update(UpdateUserParams {
            id: 999,
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
