use super::*;

/// Tests listing active payments for everyone and for one payer.
///
/// Expected: Ok, soft-deleted payments hidden, newest payment date first
#[tokio::test]
async fn lists_active_payments_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let payer = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let older = factory::payment::PaymentFactory::new(db, payer.id)
        .payment_date(Utc::now() - Duration::days(3))
        .build()
        .await?;
    let newer = factory::create_payment(db, payer.id).await?;
    let foreign = factory::create_payment(db, other.id).await?;
    factory::payment::PaymentFactory::new(db, payer.id)
        .is_active(false)
        .build()
        .await?;

    let repo = PaymentRepository::new(db);
    let mine: Vec<i32> = repo
        .get_active(Some(payer.id))
        .await?
        .iter()
        .map(|p| p.id)
        .collect();
    let all = repo.get_active(None).await?;

    assert_eq!(mine, vec![newer.id, older.id]);
    assert_eq!(all.len(), 3);
    assert!(all.iter().any(|p| p.id == foreign.id));

    Ok(())
}

/// Tests paging through active payments.
///
/// Expected: Ok with the total of active payments and a partial last page
#[tokio::test]
async fn pages_active_payments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let payer = factory::create_user(db).await?;
    for _ in 0..12 {
        factory::create_payment(db, payer.id).await?;
    }
    factory::payment::PaymentFactory::new(db, payer.id)
        .is_active(false)
        .build()
        .await?;

    let repo = PaymentRepository::new(db);
    let first = repo.get_active_paginated(None, 0, 10).await?;
    let second = repo.get_active_paginated(Some(payer.id), 1, 10).await?;

    assert_eq!(first.total, 12);
    assert_eq!(first.payments.len(), 10);
    assert_eq!(second.payments.len(), 2);

    Ok(())
}
