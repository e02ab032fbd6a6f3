use super::*;

/// Tests finding the owner's draft of a property.
///
/// Expected: Ok(Some) for the owner's draft
#[tokio::test]
async fn finds_owners_draft() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_draft_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (host, property, draft) = factory::helpers::create_draft_of_property(db).await?;

    let repo = DraftRepository::new(db);
    let found = repo.find_by_property_and_owner(property.id, host.id).await?;

    assert_eq!(found.map(|d| d.id), Some(draft.id));

    Ok(())
}

/// Tests that drafts of other users are not returned.
///
/// Verifies that an admin looking up a host's property does not receive the host's draft.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_drafts_of_other_owners() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_draft_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property, _) = factory::helpers::create_draft_of_property(db).await?;
    let admin = factory::create_admin(db).await?;

    let repo = DraftRepository::new(db);
    let found = repo.find_by_property_and_owner(property.id, admin.id).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that the oldest draft wins when several exist.
///
/// Expected: Ok(Some) with the first draft created
#[tokio::test]
async fn returns_oldest_draft() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_draft_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (host, property, first) = factory::helpers::create_draft_of_property(db).await?;
    factory::draft::DraftFactory::new(db, host.id)
        .original_property_id(property.id)
        .build()
        .await?;

    let repo = DraftRepository::new(db);
    let found = repo.find_by_property_and_owner(property.id, host.id).await?;

    assert_eq!(found.map(|d| d.id), Some(first.id));

    Ok(())
}
