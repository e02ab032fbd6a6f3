use super::*;

/// Tests creating a property from complete fields.
///
/// Verifies that moderation fields start at their defaults and nested documents
/// round-trip through their JSON columns.
///
/// Expected: Ok with the created property
#[tokio::test]
async fn creates_property_with_moderation_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_host(db).await?;
    let mut fields = complete_fields();
    fields.photos = Some(vec![PhotoDto {
        url: Some("/images/front.jpg".to_string()),
        ..Default::default()
    }]);

    let repo = PropertyRepository::new(db);
    let property = repo
        .create(CreatePropertyParams::from_fields(host.id, fields).unwrap())
        .await?;

    assert_eq!(property.host_id, host.id);
    assert!(property.is_active);
    assert!(!property.is_approved);
    assert_eq!(property.views, 0);
    assert!(property.reviews.is_empty());
    assert_eq!(property.photos.len(), 1);
    assert_eq!(property.photos[0].url.as_deref(), Some("/images/front.jpg"));

    Ok(())
}
