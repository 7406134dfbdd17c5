//! Hotel data repository for database operations.
//!
//! `HotelRepository` serves the filtered, projected and paginated hotel list
//! as well as single-hotel CRUD. List rows are returned as JSON objects since
//! a projection may leave out any column except `id`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait,
};

use crate::server::{
    data::query,
    model::{
        hotel::{CreateHotelParams, Hotel, HotelSchema, UpdateHotelParams},
        query::QueryPlan,
    },
};

pub struct HotelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches one page of hotels according to the plan.
    ///
    /// # Arguments
    /// - `plan` - Translated list request
    ///
    /// # Returns
    /// - `Ok(Vec<Value>)` - One JSON object per hotel, containing `id` plus the projected fields
    /// - `Err(DbErr)` - Database error or a plan field without a matching column
    pub async fn find_by_plan(&self, plan: &QueryPlan) -> Result<Vec<serde_json::Value>, DbErr> {
        let select = query::filtered::<entity::prelude::Hotel>(plan)?;

        query::windowed::<_, HotelSchema>(select, plan)?
            .into_json()
            .all(self.db)
            .await
    }

    /// Counts every hotel matching the plan's filters, ignoring the window.
    pub async fn count_by_plan(&self, plan: &QueryPlan) -> Result<u64, DbErr> {
        query::filtered::<entity::prelude::Hotel>(plan)?
            .count(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Hotel>, DbErr> {
        let entity = entity::prelude::Hotel::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Hotel::from_entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::Hotel::find_by_id(id)
            .count(self.db)
            .await?
            > 0)
    }

    /// Inserts a hotel.
    ///
    /// # Returns
    /// - `Ok(Hotel)` - The created hotel
    /// - `Err(DbErr)` - Database error, including a unique violation on `name`
    pub async fn create(&self, params: CreateHotelParams) -> Result<Hotel, DbErr> {
        let entity = entity::hotel::ActiveModel {
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            district: ActiveValue::Set(params.district),
            province: ActiveValue::Set(params.province),
            postal_code: ActiveValue::Set(params.postal_code),
            tel: ActiveValue::Set(params.tel),
            region: ActiveValue::Set(params.region),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Hotel::from_entity(entity))
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Hotel))` - The updated hotel
    /// - `Ok(None)` - No hotel with the given id
    /// - `Err(DbErr)` - Database error, including a unique violation on `name`
    pub async fn update(&self, params: UpdateHotelParams) -> Result<Option<Hotel>, DbErr> {
        let Some(entity) = entity::prelude::Hotel::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model = entity.into_active_model();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(address) = params.address {
            active_model.address = ActiveValue::Set(address);
        }
        if let Some(district) = params.district {
            active_model.district = ActiveValue::Set(Some(district));
        }
        if let Some(province) = params.province {
            active_model.province = ActiveValue::Set(Some(province));
        }
        if let Some(postal_code) = params.postal_code {
            active_model.postal_code = ActiveValue::Set(Some(postal_code));
        }
        if let Some(tel) = params.tel {
            active_model.tel = ActiveValue::Set(Some(tel));
        }
        if let Some(region) = params.region {
            active_model.region = ActiveValue::Set(Some(region));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(Hotel::from_entity(entity)))
    }

    /// Deletes the hotel row only. Bookings must already be gone.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows removed, 0 when the id does not exist
    /// - `Err(DbErr)` - Database error, including a foreign key violation
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Hotel::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
