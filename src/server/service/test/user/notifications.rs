use super::*;

/// Tests sending a notification and reading it back as the recipient.
///
/// Expected: Ok with one unread notification carrying the sent fields
#[tokio::test]
async fn sends_and_lists_notification() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = as_user(factory::create_admin(db).await?);
    let user = as_user(factory::create_user(db).await?);

    let service = UserService::new(db);
    let sent = service
        .send_notification(&admin, user.id, notice("booking"))
        .await?;
    let listed = service.get_notifications(&user, user.id).await?;

    assert!(!sent.is_read);
    assert_eq!(sent.kind, "booking");
    assert_eq!(listed, vec![sent]);

    Ok(())
}

/// Tests marking a notification as read.
///
/// Expected: Ok with `is_read` set, and the stored copy updated
#[tokio::test]
async fn marks_notification_read() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = as_user(factory::create_admin(db).await?);
    let user = as_user(factory::create_user(db).await?);

    let service = UserService::new(db);
    let sent = service
        .send_notification(&admin, user.id, notice("review"))
        .await?;
    let read = service
        .mark_notification_read(&user, user.id, &sent.id)
        .await?;
    let listed = service.get_notifications(&user, user.id).await?;

    assert!(read.is_read);
    assert!(listed[0].is_read);

    Ok(())
}

/// Tests marking a notification id the user does not have.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_notification() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = as_user(factory::create_user(db).await?);

    let result = UserService::new(db)
        .mark_notification_read(&user, user.id, "missing")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that sending prunes read notifications down to the newest two.
///
/// Expected: Ok, unread notifications kept, only the two latest read ones kept
#[tokio::test]
async fn prunes_old_read_notifications() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = as_user(factory::create_admin(db).await?);
    let user = as_user(factory::create_user(db).await?);

    let service = UserService::new(db);
    let mut read_ids = Vec::new();
    for _ in 0..3 {
        let sent = service
            .send_notification(&admin, user.id, notice("info"))
            .await?;
        service
            .mark_notification_read(&user, user.id, &sent.id)
            .await?;
        read_ids.push(sent.id);
    }
    let unread = service
        .send_notification(&admin, user.id, notice("info"))
        .await?;
    let latest = service
        .send_notification(&admin, user.id, notice("info"))
        .await?;

    let ids: Vec<String> = service
        .get_notifications(&user, user.id)
        .await?
        .into_iter()
        .map(|n| n.id)
        .collect();

    assert_eq!(
        ids,
        vec![
            read_ids[1].clone(),
            read_ids[2].clone(),
            unread.id,
            latest.id
        ]
    );

    Ok(())
}

/// Tests reading another user's notifications as a non-admin.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn rejects_foreign_reader() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = as_user(factory::create_user(db).await?);
    let other = as_user(factory::create_user(db).await?);

    let service = UserService::new(db);

    assert!(matches!(
        service.get_notifications(&other, owner.id).await,
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        service.mark_notification_read(&other, owner.id, "any").await,
        Err(AppError::Forbidden(_))
    ));

    Ok(())
}

/// Tests sending to a deactivated user, and sending without a type.
///
/// Expected: Err(AppError::NotFound) and Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_inactive_recipient_and_blank_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = as_user(factory::create_admin(db).await?);
    let inactive = factory::user::UserFactory::new(db)
        .is_active(false)
        .build()
        .await?;
    let user = factory::create_user(db).await?;

    let service = UserService::new(db);

    assert!(matches!(
        service
            .send_notification(&admin, inactive.id, notice("info"))
            .await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.send_notification(&admin, user.id, notice("  ")).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
