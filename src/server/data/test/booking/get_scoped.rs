use super::*;

/// Tests listing every booking.
///
/// Verifies that an unscoped listing returns bookings of all users with their
/// hotel attached.
///
/// Expected: Ok with all bookings and hotel populated
#[tokio::test]
async fn returns_all_bookings_with_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, hotel, _) = factory::helpers::create_hotel_with_bookings(db, 2).await?;
    factory::helpers::create_hotel_with_bookings(db, 1).await?;

    let bookings = BookingRepository::new(db).get_scoped(None, None).await?;

    assert_eq!(bookings.len(), 3);
    assert!(bookings.iter().all(|b| b.hotel.is_some()));
    let first_hotel = bookings
        .iter()
        .find(|b| b.hotel_id == hotel.id)
        .and_then(|b| b.hotel.as_ref())
        .unwrap();
    assert_eq!(first_hotel.name, hotel.name);

    Ok(())
}

/// Tests scoping the listing to a single user.
///
/// Expected: Ok with only that user's bookings
#[tokio::test]
async fn scopes_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _) = factory::helpers::create_hotel_with_bookings(db, 2).await?;
    factory::helpers::create_hotel_with_bookings(db, 3).await?;

    let bookings = BookingRepository::new(db)
        .get_scoped(Some(user.id), None)
        .await?;

    assert_eq!(bookings.len(), 2);
    assert!(bookings.iter().all(|b| b.user_id == user.id));

    Ok(())
}

/// Tests scoping the listing to both a user and a hotel.
///
/// Expected: Ok with the single booking matching both
#[tokio::test]
async fn scopes_to_user_and_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let hotel_a = factory::create_hotel(db).await?;
    let hotel_b = factory::create_hotel(db).await?;
    let wanted = factory::create_booking(db, user.id, hotel_a.id).await?;
    factory::create_booking(db, user.id, hotel_b.id).await?;

    let bookings = BookingRepository::new(db)
        .get_scoped(Some(user.id), Some(hotel_a.id))
        .await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, wanted.id);

    Ok(())
}

/// Tests ordering by booking date.
///
/// Expected: Ok with the earlier stay first
#[tokio::test]
async fn orders_by_booking_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let hotel = factory::create_hotel(db).await?;
    let now = Utc::now();
    let later = BookingFactory::new(db, user.id, hotel.id)
        .booking_date(now + Duration::days(30))
        .build()
        .await?;
    let sooner = BookingFactory::new(db, user.id, hotel.id)
        .booking_date(now + Duration::days(3))
        .build()
        .await?;

    let bookings = BookingRepository::new(db).get_scoped(None, None).await?;

    let ids: Vec<i32> = bookings.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![sooner.id, later.id]);

    Ok(())
}
