use super::*;

/// Tests paginating users.
///
/// Verifies that a page holds at most `per_page` users and the total counts every user.
///
/// Expected: Ok with two pages of results
#[tokio::test]
async fn paginates_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_user(db).await?;
    }

    let repo = UserRepository::new(db);
    let first = repo.get_all_paginated(0, 2).await?;
    let second = repo.get_all_paginated(1, 2).await?;

    assert_eq!(first.total, 3);
    assert_eq!(first.users.len(), 2);
    assert_eq!(second.users.len(), 1);
    assert!(first.users[0].id < first.users[1].id);

    Ok(())
}
