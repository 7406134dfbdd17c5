//! Booking data repository for database operations.
//!
//! Bookings are read together with a short form of their hotel. The bulk
//! helpers `get_by_hotel_ids` and `delete_by_hotel` back the hotel list and
//! the hotel cascade delete.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::booking::{Booking, CreateBookingParams, UpdateBookingParams};

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists bookings with their hotel, ordered by booking date.
    ///
    /// # Arguments
    /// - `user_id` - Only bookings owned by this user, or every booking when `None`
    /// - `hotel_id` - Only bookings on this hotel, or every hotel when `None`
    ///
    /// # Returns
    /// - `Ok(Vec<Booking>)` - Matching bookings, each with `hotel` populated
    /// - `Err(DbErr)` - Database error
    pub async fn get_scoped(
        &self,
        user_id: Option<i32>,
        hotel_id: Option<i32>,
    ) -> Result<Vec<Booking>, DbErr> {
        let mut select = entity::prelude::Booking::find();
        if let Some(user_id) = user_id {
            select = select.filter(entity::booking::Column::UserId.eq(user_id));
        }
        if let Some(hotel_id) = hotel_id {
            select = select.filter(entity::booking::Column::HotelId.eq(hotel_id));
        }

        let rows = select
            .order_by_asc(entity::booking::Column::BookingDate)
            .order_by_asc(entity::booking::Column::Id)
            .find_also_related(entity::prelude::Hotel)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(booking, hotel)| Booking::from_entity_with_hotel(booking, hotel))
            .collect())
    }

    /// Bookings of every hotel in `hotel_ids`, without hotel data.
    pub async fn get_by_hotel_ids(&self, hotel_ids: &[i32]) -> Result<Vec<Booking>, DbErr> {
        if hotel_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::Booking::find()
            .filter(entity::booking::Column::HotelId.is_in(hotel_ids.iter().copied()))
            .order_by_asc(entity::booking::Column::BookingDate)
            .order_by_asc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(Booking::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let row = entity::prelude::Booking::find_by_id(id)
            .find_also_related(entity::prelude::Hotel)
            .one(self.db)
            .await?;

        Ok(row.map(|(booking, hotel)| Booking::from_entity_with_hotel(booking, hotel)))
    }

    pub async fn count_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Inserts a booking and returns it with its hotel.
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, DbErr> {
        let entity = entity::booking::ActiveModel {
            booking_date: ActiveValue::Set(params.booking_date),
            user_id: ActiveValue::Set(params.user_id),
            hotel_id: ActiveValue::Set(params.hotel_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(entity.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Booking with id {} not found after creation",
            entity.id
        )))
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - The updated booking with its hotel
    /// - `Ok(None)` - No booking with the given id
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, params: UpdateBookingParams) -> Result<Option<Booking>, DbErr> {
        let Some(entity) = entity::prelude::Booking::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model = entity.into_active_model();
        if let Some(booking_date) = params.booking_date {
            active_model.booking_date = ActiveValue::Set(booking_date);
        }
        let entity = active_model.update(self.db).await?;

        self.get_by_id(entity.id).await
    }

    /// Deletes a single booking.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows removed, 0 when the id does not exist
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every booking referencing `hotel_id`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of bookings removed
    /// - `Err(DbErr)` - Database error
    pub async fn delete_by_hotel(&self, hotel_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::delete_many()
            .filter(entity::booking::Column::HotelId.eq(hotel_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
