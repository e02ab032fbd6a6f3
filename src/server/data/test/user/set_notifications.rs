use super::*;
use crate::model::user::NotificationDto;
use chrono::Utc;

fn notification(id: &str) -> NotificationDto {
    NotificationDto {
        id: id.to_string(),
        kind: "booking".to_string(),
        title: Some("New booking".to_string()),
        icon: None,
        message: Some("Your property was booked".to_string()),
        entity_type: Some("booking".to_string()),
        entity_id: Some("7".to_string()),
        long_message: None,
        is_read: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Tests storing and reading back a notification list.
///
/// Expected: Ok and the decoded list equal to what was stored
#[tokio::test]
async fn stores_notifications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let stored = vec![notification("a"), notification("b")];

    let repo = UserRepository::new(db);
    repo.set_notifications(user.id, &stored).await?;

    let found = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(found.notifications, stored);

    Ok(())
}

/// Tests that a freshly created user has no notifications.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn new_user_has_no_notifications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserRepository::new(db)
        .create(CreateUserParams {
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Guest,
        })
        .await?;

    assert!(created.notifications.is_empty());

    Ok(())
}

/// Tests storing notifications for a user that does not exist.
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

    let result = UserRepository::new(db)
        .set_notifications(999, &[notification("a")])
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
