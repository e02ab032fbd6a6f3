use super::*;

/// Tests that a non-admin lists only their own payments and an admin lists all.
///
/// Expected: Ok with one payment for the payer and two for the admin
#[tokio::test]
async fn scopes_list_to_caller() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let payer = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let admin = as_user(factory::create_admin(db).await?);
    let mine = factory::create_payment(db, payer.id).await?;
    factory::create_payment(db, other.id).await?;

    let service = PaymentService::new(db);
    let own = service.list(&as_user(payer)).await?;

    assert_eq!(own.iter().map(|p| p.id).collect::<Vec<_>>(), vec![mine.id]);
    assert_eq!(service.list(&admin).await?.len(), 2);

    Ok(())
}

/// Tests the one-based paged listing.
///
/// Expected: ten payments on page 1, the rest on page 2, BadRequest for page 0
#[tokio::test]
async fn pages_ten_at_a_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let payer = factory::create_user(db).await?;
    for _ in 0..13 {
        factory::create_payment(db, payer.id).await?;
    }
    let payer = as_user(payer);

    let service = PaymentService::new(db);
    let first = service.list_page(&payer, 1).await?;
    let second = service.list_page(&payer, 2).await?;

    assert_eq!(first.payments.len(), 10);
    assert_eq!(first.page, 1);
    assert_eq!(first.total, 13);
    assert_eq!(second.payments.len(), 3);
    assert!(matches!(
        service.list_page(&payer, 0).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
