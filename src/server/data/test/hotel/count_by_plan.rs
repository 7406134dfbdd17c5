use super::*;

/// Tests that the count applies the plan's filters.
///
/// Expected: Ok(2) for two matching hotels out of three
#[tokio::test]
async fn counts_only_matching_hotels() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    HotelFactory::new(db).province("Bangkok").build().await?;
    HotelFactory::new(db).province("Bangkok").build().await?;
    HotelFactory::new(db).province("Krabi").build().await?;

    let count = HotelRepository::new(db)
        .count_by_plan(&plan(&[("province", "Bangkok")]))
        .await?;

    assert_eq!(count, 2);

    Ok(())
}

/// Tests that the count ignores the pagination window.
///
/// Expected: Ok(3) even though the page holds a single hotel
#[tokio::test]
async fn ignores_pagination_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_hotel(db).await?;
    }

    let count = HotelRepository::new(db)
        .count_by_plan(&plan(&[("page", "2"), ("limit", "1")]))
        .await?;

    assert_eq!(count, 3);

    Ok(())
}
