use super::*;

fn empty_update(id: i32) -> UpdateHotelParams {
    UpdateHotelParams {
        id,
        name: None,
        address: None,
        district: None,
        province: None,
        postal_code: None,
        tel: None,
        region: None,
    }
}

/// Tests a partial update.
///
/// Verifies that only provided fields change.
///
/// Expected: Ok(Some) with the new province and the old name
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = HotelFactory::new(db)
        .name("Lagoon")
        .province("Phuket")
        .build()
        .await?;

    let updated = HotelRepository::new(db)
        .update(UpdateHotelParams {
            province: Some("Krabi".to_string()),
            ..empty_update(hotel.id)
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Lagoon");
    assert_eq!(updated.province.as_deref(), Some("Krabi"));

    Ok(())
}

/// Tests updating a hotel that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = HotelRepository::new(db).update(empty_update(999)).await?;

    assert!(result.is_none());

    Ok(())
}
