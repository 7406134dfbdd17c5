//! Hotel business logic: listing, CRUD and the cascade delete.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use std::collections::HashMap;

use crate::server::{
    data::{booking::BookingRepository, hotel::HotelRepository},
    error::AppError,
    model::{
        hotel::{CascadeStage, CreateHotelParams, Hotel, HotelPage, HotelSchema, UpdateHotelParams},
        query::{ListRequestParams, PaginationSummary, QueryPlan},
    },
};

pub struct HotelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists hotels for a raw list request.
    ///
    /// Translates the request, fetches the requested page, counts every
    /// matching hotel and attaches each hotel's bookings.
    ///
    /// # Arguments
    /// - `params` - Raw query string pairs of the request
    ///
    /// # Returns
    /// - `Ok(HotelPage)` - Page rows and pagination summary
    /// - `Err(AppError::QueryErr)` - Unknown field, ill-typed value or empty `in` list
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list(&self, params: &ListRequestParams) -> Result<HotelPage, AppError> {
        let plan = QueryPlan::translate::<HotelSchema>(params)?;
        let repo = HotelRepository::new(self.db);

        let total = repo.count_by_plan(&plan).await?;
        let mut data = repo.find_by_plan(&plan).await?;

        self.attach_bookings(&mut data).await?;

        Ok(HotelPage {
            data,
            pagination: PaginationSummary::new(total, plan.page, plan.limit),
        })
    }

    /// Adds a `bookings` array to every row, grouped by hotel id.
    async fn attach_bookings(&self, rows: &mut [serde_json::Value]) -> Result<(), AppError> {
        let ids: Vec<i32> = rows
            .iter()
            .filter_map(|row| row.get("id").and_then(serde_json::Value::as_i64))
            .filter_map(|id| i32::try_from(id).ok())
            .collect();

        let mut by_hotel: HashMap<i32, Vec<serde_json::Value>> = HashMap::new();
        for booking in BookingRepository::new(self.db)
            .get_by_hotel_ids(&ids)
            .await?
        {
            let hotel_id = booking.hotel_id;
            let value = serde_json::to_value(booking.into_dto())
                .map_err(|e| AppError::InternalError(e.to_string()))?;
            by_hotel.entry(hotel_id).or_default().push(value);
        }

        for row in rows.iter_mut() {
            let id = row
                .get("id")
                .and_then(serde_json::Value::as_i64)
                .and_then(|id| i32::try_from(id).ok());
            let bookings = id.and_then(|id| by_hotel.remove(&id)).unwrap_or_default();

            if let Some(object) = row.as_object_mut() {
                object.insert("bookings".to_string(), serde_json::Value::Array(bookings));
            }
        }

        Ok(())
    }

    /// Gets a hotel by id.
    ///
    /// # Returns
    /// - `Ok(Hotel)` - The hotel
    /// - `Err(AppError::NotFound)` - No hotel with that id
    pub async fn get_by_id(&self, id: i32) -> Result<Hotel, AppError> {
        HotelRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| hotel_not_found(id))
    }

    /// Creates a hotel.
    ///
    /// # Returns
    /// - `Ok(Hotel)` - The created hotel
    /// - `Err(AppError::Validation)` - A hotel with this name already exists
    pub async fn create(&self, params: CreateHotelParams) -> Result<Hotel, AppError> {
        HotelRepository::new(self.db)
            .create(params)
            .await
            .map_err(duplicate_name)
    }

    /// Applies a partial update to a hotel.
    ///
    /// # Returns
    /// - `Ok(Hotel)` - The updated hotel
    /// - `Err(AppError::NotFound)` - No hotel with that id
    /// - `Err(AppError::Validation)` - The new name is taken
    pub async fn update(&self, params: UpdateHotelParams) -> Result<Hotel, AppError> {
        let id = params.id;

        HotelRepository::new(self.db)
            .update(params)
            .await
            .map_err(duplicate_name)?
            .ok_or_else(|| hotel_not_found(id))
    }

    /// Deletes a hotel and every booking that references it.
    ///
    /// Bookings go first, then the hotel. The two deletes are not atomic; if
    /// the hotel delete fails the hotel stays without bookings and the call
    /// can be repeated.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of bookings removed along with the hotel
    /// - `Err(AppError::NotFound)` - No hotel with that id, nothing was changed
    /// - `Err(AppError::DbErr)` - Either delete failed
    pub async fn delete_with_children(&self, id: i32) -> Result<u64, AppError> {
        let hotels = HotelRepository::new(self.db);
        let bookings = BookingRepository::new(self.db);

        let stage = CascadeStage::Pending;
        tracing::debug!("Deleting hotel {}: {:?}", id, stage);

        if !hotels.exists(id).await? {
            let stage = CascadeStage::NotFound;
            tracing::debug!("Deleting hotel {}: {:?}", id, stage);
            return Err(hotel_not_found(id));
        }

        let bookings_removed = bookings.delete_by_hotel(id).await?;
        let stage = CascadeStage::ChildrenPurged { bookings_removed };
        tracing::debug!("Deleting hotel {}: {:?}", id, stage);

        let removed = hotels.delete(id).await.inspect_err(|e| {
            tracing::error!(
                "Hotel {} lost {} bookings but could not be deleted: {}",
                id,
                bookings_removed,
                e
            )
        })?;
        if removed == 0 {
            // Deleted concurrently between the lookup and now.
            tracing::warn!("Hotel {} disappeared during delete", id);
        }

        let stage = CascadeStage::ParentDeleted { bookings_removed };
        tracing::info!("Deleted hotel {}: {:?}", id, stage);

        Ok(bookings_removed)
    }
}

fn hotel_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Hotel {} not found", id))
}

fn duplicate_name(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Validation("A hotel with this name already exists".to_string())
        }
        _ => err.into(),
    }
}
