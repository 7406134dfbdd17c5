use super::*;

/// Tests renaming a hotel.
///
/// Expected: Ok with the new name
#[tokio::test]
async fn renames_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::create_hotel(db).await?;

    let updated = HotelService::new(db)
        .update(UpdateHotelParams {
            id: hotel.id,
            name: Some("Renamed".to_string()),
            address: None,
            district: None,
            province: None,
            postal_code: None,
            tel: None,
            region: None,
        })
        .await
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.address, hotel.address);

    Ok(())
}

/// Tests updating an id that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_hotel_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = HotelService::new(db)
        .update(UpdateHotelParams {
            id: 404,
            name: None,
            address: None,
            district: None,
            province: None,
            postal_code: None,
            tel: None,
            region: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
