use super::*;

fn complete_draft() -> serde_json::Value {
    json!({
        "type": 1,
        "title": "New cabin",
        "max_guests": 3,
        "width": 8.0,
        "length": 12.0,
        "check_in": 900,
        "check_out": 660,
        "min_stay_nights": 2,
        "max_stay_nights": 14,
        "price_per_night": 80.0,
        "currency": "MXN",
        "id": 9999,
        "host_id": 9999,
        "is_approved": true,
        "views": 42
    })
}

/// Tests that a new property takes the caller as host and drops identity fields.
///
/// Expected: Ok with a fresh id, caller as host, moderation defaults and the draft gone
#[tokio::test]
async fn creates_property_owned_by_caller() -> Result<(), AppError> {
    let test = TestBuilder::new().with_draft_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, media) = media_store().await;

    let host = factory::create_host(db).await?;
    let draft = factory::draft::DraftFactory::new(db, host.id)
        .draft_data(complete_draft())
        .build()
        .await?;
    let host = as_user(host);

    let service = DraftService::new(db, &media, false);
    let outcome = service.publish_to_new(&host, draft.id).await?;

    let property = outcome.property;
    assert_ne!(property.id, 9999);
    assert_eq!(property.host_id, host.id);
    assert_eq!(property.title.as_deref(), Some("New cabin"));
    assert!(property.is_active);
    assert!(!property.is_approved);
    assert_eq!(property.views, 0);
    assert!(DraftRepository::new(db).find_by_id(draft.id).await?.is_none());

    Ok(())
}

/// Tests that a draft missing required fields cannot become a property.
///
/// Expected: Err(AppError::BadRequest) and the draft still exists
#[tokio::test]
async fn rejects_incomplete_draft() -> Result<(), AppError> {
    let test = TestBuilder::new().with_draft_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, media) = media_store().await;

    let host = factory::create_host(db).await?;
    let draft = factory::draft::DraftFactory::new(db, host.id)
        .draft_data(json!({ "title": "Only a title" }))
        .build()
        .await?;
    let host = as_user(host);

    let service = DraftService::new(db, &media, false);
    let result = service.publish_to_new(&host, draft.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(DraftRepository::new(db).find_by_id(draft.id).await?.is_some());

    Ok(())
}
