use super::*;

/// Tests that an admin may delete someone else's review.
///
/// Expected: Ok and the review is gone
#[tokio::test]
async fn admin_deletes_review() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;
    let author = as_user(factory::create_user(db).await?);
    let admin = as_user(factory::create_admin(db).await?);

    let service = ReviewService::new(db);
    let added = service.add(&author, property.id, review(2)).await?;
    service.delete(&admin, property.id, &added.id).await?;

    assert!(service.list(property.id).await?.is_empty());

    Ok(())
}

/// Tests that another guest cannot delete a review.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn rejects_other_guest() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;
    let author = as_user(factory::create_user(db).await?);
    let other = as_user(factory::create_user(db).await?);

    let service = ReviewService::new(db);
    let added = service.add(&author, property.id, review(2)).await?;
    let result = service.delete(&other, property.id, &added.id).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests deleting a review that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_review_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;
    let admin = as_user(factory::create_admin(db).await?);

    let result = ReviewService::new(db)
        .delete(&admin, property.id, "missing")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
