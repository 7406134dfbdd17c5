use super::*;

/// Tests counting a user's bookings.
///
/// Expected: Ok(2) for the user with two bookings
#[tokio::test]
async fn counts_bookings_of_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _) = factory::helpers::create_hotel_with_bookings(db, 2).await?;
    factory::helpers::create_hotel_with_bookings(db, 1).await?;

    let count = BookingRepository::new(db).count_by_user(user.id).await?;

    assert_eq!(count, 2);

    Ok(())
}
