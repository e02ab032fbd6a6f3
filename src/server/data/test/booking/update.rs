use super::*;

/// Tests changing the guest count of a booking.
///
/// Expected: Ok with only the supplied fields changed
#[tokio::test]
async fn updates_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;
    let guest = factory::create_user(db).await?;
    let booking = factory::create_booking(db, &property, guest.id).await?;

    let repo = BookingRepository::new(db);
    let updated = repo
        .update(UpdateBookingParams {
            id: booking.id,
            guests: Some(3),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.guests, 3);
    assert_eq!(updated.check_in, booking.check_in);
    assert_eq!(updated.total_price, booking.total_price);

    Ok(())
}
