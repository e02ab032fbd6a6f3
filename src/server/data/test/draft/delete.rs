use super::*;

/// Tests deleting a draft.
///
/// Expected: Ok(true) once, then Ok(false)
#[tokio::test]
async fn deletes_draft_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_draft_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, draft) = factory::helpers::create_draft_of_property(db).await?;

    let repo = DraftRepository::new(db);

    assert!(repo.delete(draft.id).await?);
    assert!(!repo.delete(draft.id).await?);
    assert!(repo.find_by_id(draft.id).await?.is_none());

    Ok(())
}
