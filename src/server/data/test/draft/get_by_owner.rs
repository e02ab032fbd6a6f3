use super::*;

/// Tests listing a user's drafts filtered by review state.
///
/// Expected: Ok with the matching drafts for each filter
#[tokio::test]
async fn filters_by_review_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_draft_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_host(db).await?;
    let other = factory::create_host(db).await?;
    let editing = factory::create_draft(db, host.id).await?;
    let in_review = factory::draft::DraftFactory::new(db, host.id)
        .is_in_review(true)
        .build()
        .await?;
    factory::create_draft(db, other.id).await?;

    let repo = DraftRepository::new(db);
    let all = repo
        .get_by_owner(host.id, DraftReviewFilter::All.in_review())
        .await?;
    let not_in_review = repo
        .get_by_owner(host.id, DraftReviewFilter::NotInReview.in_review())
        .await?;
    let reviewing = repo
        .get_by_owner(host.id, DraftReviewFilter::InReview.in_review())
        .await?;

    assert_eq!(all.len(), 2);
    assert_eq!(not_in_review.iter().map(|d| d.id).collect::<Vec<_>>(), vec![editing.id]);
    assert_eq!(reviewing.iter().map(|d| d.id).collect::<Vec<_>>(), vec![in_review.id]);

    Ok(())
}
