use super::*;

/// Tests inserting a payment linked to a booking.
///
/// Expected: Ok with the payment active and not yet updated
#[tokio::test]
async fn creates_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;
    let guest = factory::create_user(db).await?;
    let booking = factory::create_booking(db, &property, guest.id).await?;

    let payment = PaymentRepository::new(db)
        .create(CreatePaymentParams {
            user_id: guest.id,
            booking_id: Some(booking.id),
            method: "card".to_string(),
            amount: booking.total_price,
            currency: "EUR".to_string(),
            status: "completed".to_string(),
            description: "Two nights".to_string(),
            receipt_url: "https://pay.example.com/r/1".to_string(),
            payment_date: Utc::now(),
        })
        .await?;

    assert_eq!(payment.user_id, guest.id);
    assert_eq!(payment.booking_id, Some(booking.id));
    assert!(payment.is_active);
    assert!(payment.updated_at.is_none());

    Ok(())
}
