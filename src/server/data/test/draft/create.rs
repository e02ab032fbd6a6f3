use super::*;

/// Tests creating an unlinked draft.
///
/// Expected: Ok with a draft that is not in review and has no linked property
#[tokio::test]
async fn creates_unlinked_draft() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_draft_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_host(db).await?;

    let repo = DraftRepository::new(db);
    let draft = repo
        .create(CreateDraftParams {
            original_property_id: None,
            owner_id: host.id,
            data: DraftData::default(),
        })
        .await?;

    assert_eq!(draft.owner_id, host.id);
    assert!(draft.original_property_id.is_none());
    assert!(!draft.is_in_review);
    assert_eq!(draft.data, DraftData::default());

    Ok(())
}

/// Tests that draft content survives storage unchanged.
///
/// Expected: Ok with the same fields read back
#[tokio::test]
async fn stores_draft_content() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_draft_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (host, property) = factory::helpers::create_property_with_host(db).await?;
    let data = DraftData {
        fields: PropertyFields {
            title: Some("Working title".to_string()),
            max_guests: Some(6),
            ..Default::default()
        },
        ..Default::default()
    };

    let repo = DraftRepository::new(db);
    let created = repo
        .create(CreateDraftParams {
            original_property_id: Some(property.id),
            owner_id: host.id,
            data: data.clone(),
        })
        .await?;
    let stored = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(stored.original_property_id, Some(property.id));
    assert_eq!(stored.data, data);

    Ok(())
}
