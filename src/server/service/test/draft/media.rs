use super::*;

fn image(url: &str) -> DraftMediaDto {
    DraftMediaDto {
        media_type: "image".to_string(),
        url: url.to_string(),
    }
}

/// Tests adding and removing a photo reference.
///
/// Expected: Ok with the photo present after add and gone after remove
#[tokio::test]
async fn adds_and_removes_photo() -> Result<(), AppError> {
    let test = TestBuilder::new().with_draft_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, media) = media_store().await;

    let host = as_user(factory::create_host(db).await?);

    let service = DraftService::new(db, &media, false);
    let draft = service.create_empty(&host, None).await?;

    let added = service.add_media(&host, draft.id, image("/images/a.jpg")).await?;
    let photos = added.data.fields.photos.unwrap();
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0].url.as_deref(), Some("/images/a.jpg"));

    let removed = service
        .remove_media(&host, draft.id, image("/images/a.jpg"))
        .await?;
    assert_eq!(removed.data.fields.photos, Some(vec![]));

    Ok(())
}

/// Tests that an unknown media type is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_unknown_media_type() -> Result<(), AppError> {
    let test = TestBuilder::new().with_draft_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, media) = media_store().await;

    let host = as_user(factory::create_host(db).await?);

    let service = DraftService::new(db, &media, false);
    let draft = service.create_empty(&host, None).await?;
    let result = service
        .add_media(
            &host,
            draft.id,
            DraftMediaDto {
                media_type: "pdf".to_string(),
                url: "/pdfs/a.pdf".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that another user cannot change a draft's media.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn rejects_foreign_editor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_draft_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, media) = media_store().await;

    let (_, _, draft) = factory::helpers::create_draft_of_property(db).await?;
    let other = as_user(factory::create_host(db).await?);

    let service = DraftService::new(db, &media, false);
    let result = service
        .add_media(&other, draft.id, image("/images/a.jpg"))
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests submitting a draft for review.
///
/// Expected: Ok with is_in_review set
#[tokio::test]
async fn submits_for_review() -> Result<(), AppError> {
    let test = TestBuilder::new().with_draft_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, media) = media_store().await;

    let (host, _, draft) = factory::helpers::create_draft_of_property(db).await?;
    let host = as_user(host);

    let service = DraftService::new(db, &media, false);
    let submitted = service.submit_for_review(&host, draft.id).await?;

    assert!(submitted.is_in_review);

    Ok(())
}
