use super::*;

/// Tests adding a review.
///
/// Expected: Ok with the caller as author and the review listed on the property
#[tokio::test]
async fn adds_review() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;
    let guest = as_user(factory::create_user(db).await?);

    let service = ReviewService::new(db);
    let added = service.add(&guest, property.id, review(4)).await?;

    assert_eq!(added.user_id, guest.id);
    assert_eq!(service.list(property.id).await?, vec![added.clone()]);

    let by_user = service.list_by_user(guest.id).await?;
    assert_eq!(by_user.len(), 1);
    assert_eq!(by_user[0].property_id, property.id);
    assert_eq!(by_user[0].review, added);

    Ok(())
}

/// Tests that scores outside 1 to 5 are rejected.
///
/// Expected: Err(AppError::BadRequest) for 0 and 6
#[tokio::test]
async fn rejects_out_of_range_score() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;
    let guest = as_user(factory::create_user(db).await?);

    let service = ReviewService::new(db);
    for score in [0, 6] {
        assert!(matches!(
            service.add(&guest, property.id, review(score)).await,
            Err(AppError::BadRequest(_))
        ));
    }

    Ok(())
}

/// Tests that a review can only cite the author's own booking of the property.
///
/// Expected: Err(AppError::BadRequest) for another guest's booking
#[tokio::test]
async fn rejects_foreign_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;
    let guest = factory::create_user(db).await?;
    let booking = factory::create_booking(db, &property, guest.id).await?;
    let other = as_user(factory::create_user(db).await?);

    let mut dto = review(5);
    dto.booking_id = Some(booking.id);
    let result = ReviewService::new(db).add(&other, property.id, dto).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that only the author may edit a review.
///
/// Expected: Err(AppError::Forbidden) for another user, Ok for the author
#[tokio::test]
async fn only_author_edits() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;
    let author = as_user(factory::create_user(db).await?);
    let admin = as_user(factory::create_admin(db).await?);

    let service = ReviewService::new(db);
    let added = service.add(&author, property.id, review(3)).await?;
    let patch = || UpdateReviewDto {
        score: Some(5),
        comment: None,
    };

    assert!(matches!(
        service.update(&admin, property.id, &added.id, patch()).await,
        Err(AppError::Forbidden(_))
    ));
    let updated = service
        .update(&author, property.id, &added.id, patch())
        .await?;
    assert_eq!(updated.score, 5);
    assert_eq!(updated.comment, "Lovely stay");

    Ok(())
}
