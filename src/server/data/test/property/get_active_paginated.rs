use super::*;

/// Tests that inactive properties are excluded from listings.
///
/// Expected: Ok with only the active property counted
#[tokio::test]
async fn lists_only_active_properties() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_host(db).await?;
    let active = factory::create_property(db, host.id).await?;
    factory::property::PropertyFactory::new(db, host.id)
        .is_active(false)
        .build()
        .await?;

    let repo = PropertyRepository::new(db);
    let page = repo.get_active_paginated(0, 10).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.properties.len(), 1);
    assert_eq!(page.properties[0].id, active.id);

    Ok(())
}

/// Tests paging through active properties.
///
/// Expected: Ok with a partial last page
#[tokio::test]
async fn paginates_properties() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_host(db).await?;
    for _ in 0..3 {
        factory::create_property(db, host.id).await?;
    }

    let repo = PropertyRepository::new(db);
    let last = repo.get_active_paginated(1, 2).await?;

    assert_eq!(last.total, 3);
    assert_eq!(last.properties.len(), 1);
    assert_eq!(last.page, 1);

    Ok(())
}
