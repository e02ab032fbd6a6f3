use super::*;

/// Tests that document verification is set without touching approval.
///
/// Expected: Ok with both documents verified and the property still unapproved
#[tokio::test]
async fn verifies_documents() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;

    let moderated = PropertyService::new(db)
        .moderate(verify_documents(property.id))
        .await?;

    assert_eq!(moderated.is_proof_of_address_verified, Some(true));
    assert_eq!(moderated.is_land_use_permit_verified, Some(true));
    assert!(!moderated.is_approved);

    Ok(())
}

/// Tests that approval leaves document verification as it was.
///
/// Expected: Ok with the property approved and earlier verification kept
#[tokio::test]
async fn approves_without_resetting_verification() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;
    let service = PropertyService::new(db);
    service.moderate(verify_documents(property.id)).await?;

    let moderated = service
        .moderate(ModerationParams {
            id: property.id,
            is_approved: Some(true),
            is_proof_of_address_verified: None,
            is_land_use_permit_verified: None,
        })
        .await?;

    assert!(moderated.is_approved);
    assert_eq!(moderated.is_proof_of_address_verified, Some(true));

    Ok(())
}

/// Tests that a request with no flags is refused.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_empty_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;

    let result = PropertyService::new(db)
        .moderate(ModerationParams {
            id: property.id,
            is_approved: None,
            is_proof_of_address_verified: None,
            is_land_use_permit_verified: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that moderating an unknown property fails.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_property() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PropertyService::new(db).moderate(verify_documents(999)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
