use super::*;

/// Tests listing active guests.
///
/// Expected: Ok with the guests only
#[tokio::test]
async fn lists_users_with_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_user(db).await?;
    factory::create_host(db).await?;

    let users = UserService::new(db).get_by_role(2).await?;

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, guest.id);

    Ok(())
}

/// Tests listing by a role value outside the known roles.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_unknown_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);

    assert!(matches!(
        service.get_by_role(3).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.get_by_role(-1).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
