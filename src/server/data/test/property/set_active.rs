use super::*;

/// Tests soft-deleting a property.
///
/// Verifies that the row is kept and only the active flag changes.
///
/// Expected: Ok(true) and the property still retrievable by id
#[tokio::test]
async fn deactivates_without_deleting() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;

    let repo = PropertyRepository::new(db);
    assert!(repo.set_active(property.id, false).await?);

    let stored = repo.find_by_id(property.id).await?.unwrap();
    assert!(!stored.is_active);

    Ok(())
}

/// Tests approving a property.
///
/// Expected: Ok(true) and the approval flag set, verification flags untouched
#[tokio::test]
async fn approves_property() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;

    let repo = PropertyRepository::new(db);
    let approve = |id| ModerationParams {
        id,
        is_approved: Some(true),
        ..Default::default()
    };
    assert!(repo.moderate(approve(property.id)).await?);
    assert!(!repo.moderate(approve(999)).await?);

    let stored = repo.find_by_id(property.id).await?.unwrap();
    assert!(stored.is_approved);
    assert_eq!(stored.is_proof_of_address_verified, None);

    Ok(())
}

/// Tests marking the property documents as verified.
///
/// Expected: Ok(true), both verification flags set and approval untouched
#[tokio::test]
async fn verifies_documents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;

    let repo = PropertyRepository::new(db);
    assert!(
        repo.moderate(ModerationParams {
            id: property.id,
            is_proof_of_address_verified: Some(true),
            is_land_use_permit_verified: Some(false),
            ..Default::default()
        })
        .await?
    );

    let stored = repo.find_by_id(property.id).await?.unwrap();
    assert_eq!(stored.is_proof_of_address_verified, Some(true));
    assert_eq!(stored.is_land_use_permit_verified, Some(false));
    assert!(!stored.is_approved);

    Ok(())
}
