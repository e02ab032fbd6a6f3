use super::*;

/// Tests applying supplied fields to a property.
///
/// Verifies that supplied fields are replaced, omitted fields are kept and
/// `updated_at` moves forward.
///
/// Expected: Ok with the updated property
#[tokio::test]
async fn applies_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;

    let repo = PropertyRepository::new(db);
    let updated = repo
        .update(UpdatePropertyParams {
            id: property.id,
            fields: PropertyFields {
                title: Some("Renamed".to_string()),
                rules: Some(vec![]),
                ..Default::default()
            },
        })
        .await?;

    assert_eq!(updated.title.as_deref(), Some("Renamed"));
    assert!(updated.rules.is_empty());
    assert_eq!(updated.price_per_night, property.price_per_night);
    assert_eq!(updated.max_guests, property.max_guests);
    assert!(updated.updated_at >= property.updated_at);

    Ok(())
}

/// Tests updating a property that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_property() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PropertyRepository::new(db);
    let result = repo
        .update(UpdatePropertyParams {
            id: 999,
            fields: PropertyFields::default(),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
