use super::*;

/// Tests that changing the dates recomputes the price.
///
/// Expected: Ok with total 5 x 100
#[tokio::test]
async fn recomputes_price() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;
    let guest = as_user(factory::create_user(db).await?);

    let service = BookingService::new(db);
    let booking = service.create(&guest, stay(property.id, 2, 1)).await?;
    let updated = service
        .update(
            &guest,
            booking.id,
            UpdateBookingDto {
                check_out: Some(booking.check_in + Duration::days(5)),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.total_price, 5.0 * property.price_per_night);

    Ok(())
}

/// Tests that a stranger cannot see or cancel a booking.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn rejects_uninvolved_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;
    let guest = as_user(factory::create_user(db).await?);
    let stranger = as_user(factory::create_user(db).await?);

    let service = BookingService::new(db);
    let booking = service.create(&guest, stay(property.id, 2, 1)).await?;

    assert!(matches!(
        service.get_by_id(&stranger, booking.id).await,
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        service.cancel(&stranger, booking.id).await,
        Err(AppError::Forbidden(_))
    ));

    Ok(())
}

/// Tests that a cancelled booking is no longer visible.
///
/// Expected: Err(AppError::NotFound) after cancel
#[tokio::test]
async fn hides_cancelled_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (host, property) = factory::helpers::create_property_with_host(db).await?;
    let host = as_user(host);
    let guest = as_user(factory::create_user(db).await?);

    let service = BookingService::new(db);
    let booking = service.create(&guest, stay(property.id, 2, 1)).await?;
    service.cancel(&host, booking.id).await?;

    assert!(matches!(
        service.get_by_id(&guest, booking.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(service.list(&guest).await?.is_empty());

    Ok(())
}
