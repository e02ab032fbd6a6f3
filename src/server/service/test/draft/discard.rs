use super::*;

/// Tests that discarding resets the content to the current property.
///
/// Expected: Ok with the edited title replaced by the property's and the draft kept
#[tokio::test]
async fn resets_to_property_snapshot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_draft_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, media) = media_store().await;

    let (host, property) = factory::helpers::create_property_with_host(db).await?;
    let host = as_user(host);

    let service = DraftService::new(db, &media, false);
    let draft = service.create_from_property(&host, property.id).await?;
    service
        .update(
            &host,
            draft.id,
            PropertyFields {
                title: Some("Edited".to_string()),
                ..Default::default()
            },
        )
        .await?;

    let discarded = service.discard(&host, draft.id).await?;

    let property = load_property(db, property.id).await;
    let snapshot = DraftData::snapshot_of(&property);
    assert_eq!(discarded.data.fields, snapshot.fields);
    assert_eq!(discarded.data.protected.id, snapshot.protected.id);
    assert_eq!(discarded.data.fields.title, property.title);
    assert!(service.get_by_id(&host, draft.id).await.is_ok());

    Ok(())
}

/// Tests that an unlinked draft cannot be discarded.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_unlinked_draft() -> Result<(), AppError> {
    let test = TestBuilder::new().with_draft_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, media) = media_store().await;

    let host = as_user(factory::create_host(db).await?);

    let service = DraftService::new(db, &media, false);
    let draft = service.create_empty(&host, None).await?;
    let result = service.discard(&host, draft.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that updates merge into existing content without dropping other fields.
///
/// Expected: Ok with the new title and the snapshot's price
#[tokio::test]
async fn update_merges_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_draft_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, media) = media_store().await;

    let (host, property) = factory::helpers::create_property_with_host(db).await?;
    let host = as_user(host);

    let service = DraftService::new(db, &media, false);
    let draft = service.create_from_property(&host, property.id).await?;
    let updated = service
        .update(
            &host,
            draft.id,
            PropertyFields {
                title: Some("Edited".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.data.fields.title.as_deref(), Some("Edited"));
    assert_eq!(
        updated.data.fields.price_per_night,
        Some(property.price_per_night)
    );

    Ok(())
}

/// Tests that a draft of a deleted property cannot be reset.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_deleted_property() -> Result<(), AppError> {
    let test = TestBuilder::new().with_draft_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, media) = media_store().await;

    let (host, property, draft) = factory::helpers::create_draft_of_property(db).await?;
    PropertyRepository::new(db)
        .set_active(property.id, false)
        .await?;
    let host = as_user(host);

    let service = DraftService::new(db, &media, false);
    let result = service.discard(&host, draft.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
