use super::*;

/// Tests listing users by role.
///
/// Expected: Ok with only the active hosts, ordered by id
#[tokio::test]
async fn lists_active_users_with_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_host(db).await?;
    let second = factory::create_host(db).await?;
    factory::user::UserFactory::new(db)
        .role(factory::user::ROLE_HOST)
        .is_active(false)
        .build()
        .await?;
    factory::create_user(db).await?;
    factory::create_admin(db).await?;

    let hosts = UserRepository::new(db)
        .get_active_by_role(UserRole::Host)
        .await?;

    let ids: Vec<i32> = hosts.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
