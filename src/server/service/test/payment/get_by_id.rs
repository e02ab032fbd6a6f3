use super::*;

/// Tests that the payer and an admin can read a payment.
///
/// Expected: Ok for both
#[tokio::test]
async fn payer_and_admin_can_read() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let payer = factory::create_user(db).await?;
    let admin = as_user(factory::create_admin(db).await?);
    let stored = factory::create_payment(db, payer.id).await?;

    let service = PaymentService::new(db);

    assert_eq!(
        service.get_by_id(&as_user(payer), stored.id).await?.id,
        stored.id
    );
    assert_eq!(service.get_by_id(&admin, stored.id).await?.id, stored.id);

    Ok(())
}

/// Tests reading another user's payment.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn rejects_foreign_reader() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let payer = factory::create_user(db).await?;
    let stranger = as_user(factory::create_user(db).await?);
    let stored = factory::create_payment(db, payer.id).await?;

    let result = PaymentService::new(db).get_by_id(&stranger, stored.id).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests reading a soft-deleted payment.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn hides_deleted_payment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let payer = as_user(factory::create_user(db).await?);
    let stored = factory::create_payment(db, payer.id).await?;

    let service = PaymentService::new(db);
    service.delete(&payer, stored.id).await?;

    assert!(matches!(
        service.get_by_id(&payer, stored.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.delete(&payer, stored.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
