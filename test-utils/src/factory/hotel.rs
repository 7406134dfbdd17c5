//! Hotel factory for creating test hotel entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test hotels with customizable fields.
pub struct HotelFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: String,
    province: Option<String>,
    postal_code: Option<String>,
    region: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> HotelFactory<'a> {
    /// Creates a new HotelFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Hotel {id}"`
    /// - address: `"{id} Test Road"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Hotel {}", id),
            address: format!("{} Test Road", id),
            province: None,
            postal_code: None,
            region: None,
            created_at: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn province(mut self, province: impl Into<String>) -> Self {
        self.province = Some(province.into());
        self
    }

    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Overrides the creation timestamp, used to control default ordering.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the hotel entity into the database.
    pub async fn build(self) -> Result<entity::hotel::Model, DbErr> {
        entity::hotel::ActiveModel {
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            district: ActiveValue::Set(None),
            province: ActiveValue::Set(self.province),
            postal_code: ActiveValue::Set(self.postal_code),
            tel: ActiveValue::Set(None),
            region: ActiveValue::Set(self.region),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hotel with default values.
pub async fn create_hotel(db: &DatabaseConnection) -> Result<entity::hotel::Model, DbErr> {
    HotelFactory::new(db).build().await
}
