use super::*;

/// Tests recording document verification without changing status.
///
/// Expected: Ok with the flags set and the request still pending
#[tokio::test]
async fn records_document_verification() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = RoleChangeRepository::new(db);
    let request = repo.create(host_request(user.id)).await?;
    let reviewed = repo
        .review(ReviewRoleChangeParams {
            id: request.id,
            is_tax_document_verified: Some(true),
            is_proof_of_residence_verified: Some(false),
            ..Default::default()
        })
        .await?;

    assert_eq!(reviewed.status, "pending");
    assert_eq!(reviewed.is_tax_document_verified, Some(true));
    assert_eq!(reviewed.is_proof_of_residence_verified, Some(false));
    assert_eq!(reviewed.is_criminal_record_certificate_verified, None);

    Ok(())
}

/// Tests reviewing a request that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleChangeRepository::new(db);
    let result = repo
        .review(ReviewRoleChangeParams {
            id: 999,
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
