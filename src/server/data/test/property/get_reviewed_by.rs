use super::*;

/// Tests finding properties by review author.
///
/// Expected: Ok with only the property the user reviewed
#[tokio::test]
async fn finds_properties_reviewed_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_host(db).await?;
    let guest = factory::create_user(db).await?;
    let reviewed = factory::create_property(db, host.id).await?;
    factory::create_property(db, host.id).await?;

    let repo = PropertyRepository::new(db);
    repo.set_reviews(
        reviewed.id,
        &[ReviewDto {
            id: "r1".to_string(),
            user_id: guest.id,
            booking_id: None,
            score: 5,
            comment: "Great stay".to_string(),
            date: Utc::now(),
        }],
    )
    .await?;

    let properties = repo.get_reviewed_by(guest.id).await?;

    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].id, reviewed.id);
    assert_eq!(properties[0].reviews[0].comment, "Great stay");

    Ok(())
}
