use super::*;

/// Tests updating only the provided fields.
///
/// Expected: Ok with the status changed, the amount kept and `updated_at` stamped
#[tokio::test]
async fn updates_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let payer = factory::create_user(db).await?;
    let payment = factory::payment::PaymentFactory::new(db, payer.id)
        .amount(80.0)
        .status("pending")
        .build()
        .await?;

    let updated = PaymentRepository::new(db)
        .update(UpdatePaymentParams {
            id: payment.id,
            status: Some("completed".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.status, "completed");
    assert_eq!(updated.amount, 80.0);
    assert!(updated.updated_at.is_some());

    Ok(())
}

/// Tests updating a payment that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PaymentRepository::new(db)
        .update(UpdatePaymentParams {
            id: 999,
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Tests soft-deleting a payment.
///
/// Expected: Ok(true), the row kept but inactive; Ok(false) for an unknown id
#[tokio::test]
async fn soft_deletes_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let payer = factory::create_user(db).await?;
    let payment = factory::create_payment(db, payer.id).await?;

    let repo = PaymentRepository::new(db);
    assert!(repo.set_active(payment.id, false).await?);
    assert!(!repo.set_active(999, false).await?);

    let stored = repo.find_by_id(payment.id).await?.unwrap();
    assert!(!stored.is_active);

    Ok(())
}
