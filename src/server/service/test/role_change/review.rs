use super::*;

/// Tests that approving a request promotes the user to host.
///
/// Expected: Ok with status approved and the user now a host
#[tokio::test]
async fn approval_promotes_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = as_user(factory::create_user(db).await?);

    let service = RoleChangeService::new(db);
    let request = service.submit(&guest, application()).await?;
    let reviewed = service
        .review(
            request.id,
            ReviewRoleChangeDto {
                status: Some("approved".to_string()),
                is_tax_document_verified: Some(true),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(reviewed.status, "approved");
    assert_eq!(reviewed.is_tax_document_verified, Some(true));
    let user = UserRepository::new(db).find_by_id(guest.id).await?.unwrap();
    assert!(user.is_host());

    Ok(())
}

/// Tests that rejecting a request leaves the role unchanged.
///
/// Expected: Ok with status rejected and the user still a guest
#[tokio::test]
async fn rejection_keeps_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = as_user(factory::create_user(db).await?);

    let service = RoleChangeService::new(db);
    let request = service.submit(&guest, application()).await?;
    service
        .review(
            request.id,
            ReviewRoleChangeDto {
                status: Some("rejected".to_string()),
                ..Default::default()
            },
        )
        .await?;

    let user = UserRepository::new(db).find_by_id(guest.id).await?.unwrap();
    assert!(!user.is_host());

    Ok(())
}

/// Tests reviewing a request that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_request_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RoleChangeService::new(db)
        .review(404, ReviewRoleChangeDto::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
