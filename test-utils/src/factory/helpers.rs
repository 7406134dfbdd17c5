//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a hotel plus `bookings` bookings on it.
///
/// A fresh user is created to own the bookings.
///
/// # Arguments
/// - `db` - Database connection
/// - `bookings` - Number of bookings to create for the hotel
///
/// # Returns
/// - `Ok((user, hotel, bookings))` - The created entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_hotel_with_bookings(
    db: &DatabaseConnection,
    bookings: usize,
) -> Result<
    (
        entity::user::Model,
        entity::hotel::Model,
        Vec<entity::booking::Model>,
    ),
    DbErr,
> {
    let user = super::user::create_user(db).await?;
    let hotel = super::hotel::create_hotel(db).await?;

    let mut created = Vec::with_capacity(bookings);
    for _ in 0..bookings {
        created.push(super::booking::create_booking(db, user.id, hotel.id).await?);
    }

    Ok((user, hotel, created))
}
