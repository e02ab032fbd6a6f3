use super::*;

/// Tests submitting a host application.
///
/// Expected: Ok with a pending request and unreviewed documents
#[tokio::test]
async fn submits_pending_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = as_user(factory::create_user(db).await?);

    let request = RoleChangeService::new(db)
        .submit(&guest, application())
        .await?;

    assert_eq!(request.status, "pending");
    assert_eq!(request.user_id, guest.id);
    assert!(request.is_tax_document_verified.is_none());

    Ok(())
}

/// Tests that a second request is rejected while one is pending.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_duplicate_pending() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = as_user(factory::create_user(db).await?);

    let service = RoleChangeService::new(db);
    service.submit(&guest, application()).await?;
    let result = service.submit(&guest, application()).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that only the host role may be requested and every document is required.
///
/// Expected: Err(AppError::BadRequest) for the admin role and for a blank document
#[tokio::test]
async fn rejects_invalid_application() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = as_user(factory::create_user(db).await?);
    let service = RoleChangeService::new(db);

    let mut admin_role = application();
    admin_role.requested_role = 0;
    assert!(matches!(
        service.submit(&guest, admin_role).await,
        Err(AppError::BadRequest(_))
    ));

    let mut missing = application();
    missing.tax_document = " ".to_string();
    assert!(matches!(
        service.submit(&guest, missing).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
