use super::*;

/// Tests listing bookings visible to a user.
///
/// Verifies that both the guest and the host see an active booking, an unrelated user
/// sees nothing and cancelled bookings are hidden.
///
/// Expected: Ok with one booking for guest and host
#[tokio::test]
async fn lists_bookings_for_guest_and_host() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (host, property) = factory::helpers::create_property_with_host(db).await?;
    let guest = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let booking = factory::create_booking(db, &property, guest.id).await?;
    let cancelled = factory::create_booking(db, &property, guest.id).await?;

    let repo = BookingRepository::new(db);
    repo.set_active(cancelled.id, false).await?;

    let for_guest = repo.get_active_for_user(guest.id).await?;
    let for_host = repo.get_active_for_user(host.id).await?;
    let for_stranger = repo.get_active_for_user(stranger.id).await?;

    assert_eq!(for_guest.iter().map(|b| b.id).collect::<Vec<_>>(), vec![booking.id]);
    assert_eq!(for_host.iter().map(|b| b.id).collect::<Vec<_>>(), vec![booking.id]);
    assert!(for_stranger.is_empty());
    assert_eq!(repo.get_active().await?.len(), 1);

    Ok(())
}
