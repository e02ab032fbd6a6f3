use super::*;

/// Tests finding a user's pending request.
///
/// Verifies that only pending requests are returned.
///
/// Expected: Ok(Some) while pending, Ok(None) once reviewed
#[tokio::test]
async fn finds_only_pending_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = RoleChangeRepository::new(db);
    let request = repo.create(host_request(user.id)).await?;

    assert_eq!(request.status, "pending");
    assert_eq!(
        repo.find_pending_by_user(user.id).await?.map(|r| r.id),
        Some(request.id)
    );

    repo.review(ReviewRoleChangeParams {
        id: request.id,
        status: Some(RequestStatus::Rejected),
        ..Default::default()
    })
    .await?;

    assert!(repo.find_pending_by_user(user.id).await?.is_none());

    Ok(())
}
