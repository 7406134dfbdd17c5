//! Booking factory for creating test booking entities.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    hotel_id: i32,
    booking_date: DateTime<Utc>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory for the given user and hotel.
    ///
    /// Defaults:
    /// - booking_date: seven days from now
    pub fn new(db: &'a DatabaseConnection, user_id: i32, hotel_id: i32) -> Self {
        Self {
            db,
            user_id,
            hotel_id,
            booking_date: Utc::now() + Duration::days(7),
        }
    }

    pub fn booking_date(mut self, booking_date: DateTime<Utc>) -> Self {
        self.booking_date = booking_date;
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            booking_date: ActiveValue::Set(self.booking_date),
            user_id: ActiveValue::Set(self.user_id),
            hotel_id: ActiveValue::Set(self.hotel_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a booking with default values.
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: i32,
    hotel_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user_id, hotel_id).build().await
}
