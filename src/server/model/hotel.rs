//! Hotel domain models, parameters and list schema.

use chrono::{DateTime, Utc};

use crate::{
    model::hotel::{CreateHotelDto, HotelDto, HotelListResponse, UpdateHotelDto},
    server::{
        error::AppError,
        model::query::{FieldKind, FieldSpec, PaginationSummary, ResourceSchema},
    },
};

pub const HOTEL_NAME_MAX_LEN: usize = 50;
pub const POSTAL_CODE_MAX_LEN: usize = 5;

/// Fields of the hotel list endpoint.
pub struct HotelSchema;

impl ResourceSchema for HotelSchema {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("id", FieldKind::Integer),
        FieldSpec::new("name", FieldKind::Text),
        FieldSpec::new("address", FieldKind::Text),
        FieldSpec::new("district", FieldKind::Text),
        FieldSpec::new("province", FieldKind::Text),
        FieldSpec::new("postal_code", FieldKind::Text),
        FieldSpec::new("tel", FieldKind::Text),
        FieldSpec::new("region", FieldKind::Text),
        FieldSpec::new("created_at", FieldKind::Timestamp),
    ];
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub district: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub tel: Option<String>,
    pub region: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Hotel {
    pub fn from_entity(entity: entity::hotel::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            district: entity.district,
            province: entity.province,
            postal_code: entity.postal_code,
            tel: entity.tel,
            region: entity.region,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> HotelDto {
        HotelDto {
            id: self.id,
            name: self.name,
            address: self.address,
            district: self.district,
            province: self.province,
            postal_code: self.postal_code,
            tel: self.tel,
            region: self.region,
            created_at: self.created_at,
        }
    }
}

/// One page of the hotel list.
///
/// Rows are JSON objects because a projection may drop any field except `id`.
/// Each row carries a `bookings` array.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelPage {
    pub data: Vec<serde_json::Value>,
    pub pagination: PaginationSummary,
}

impl HotelPage {
    /// Number of hotels on this page.
    pub fn count(&self) -> usize {
        self.data.len()
    }

    pub fn into_dto(self) -> HotelListResponse {
        HotelListResponse {
            success: true,
            count: self.count(),
            pagination: self.pagination.into_dto(),
            data: self.data,
        }
    }
}

/// Validated input for creating a hotel.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateHotelParams {
    pub name: String,
    pub address: String,
    pub district: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub tel: Option<String>,
    pub region: Option<String>,
}

impl CreateHotelParams {
    /// Validates a create payload.
    ///
    /// # Returns
    /// - `Ok(CreateHotelParams)` - Trimmed, validated parameters
    /// - `Err(AppError::Validation)` - Missing name/address or a field over its length limit
    pub fn from_dto(dto: CreateHotelDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate_name(&dto.name)?,
            address: validate_required("address", &dto.address)?,
            district: normalize(dto.district),
            province: normalize(dto.province),
            postal_code: validate_postal_code(dto.postal_code)?,
            tel: normalize(dto.tel),
            region: normalize(dto.region),
        })
    }
}

/// Validated partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateHotelParams {
    pub id: i32,
    pub name: Option<String>,
    pub address: Option<String>,
    pub district: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub tel: Option<String>,
    pub region: Option<String>,
}

impl UpdateHotelParams {
    pub fn from_dto(id: i32, dto: UpdateHotelDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: dto.name.as_deref().map(validate_name).transpose()?,
            address: dto
                .address
                .as_deref()
                .map(|a| validate_required("address", a))
                .transpose()?,
            district: normalize(dto.district),
            province: normalize(dto.province),
            postal_code: validate_postal_code(dto.postal_code)?,
            tel: normalize(dto.tel),
            region: normalize(dto.region),
        })
    }
}

fn validate_required(field: &str, value: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Validation(format!("Please add a {}", field)));
    }
    Ok(value.to_string())
}

fn validate_name(name: &str) -> Result<String, AppError> {
    let name = validate_required("name", name)?;
    if name.chars().count() > HOTEL_NAME_MAX_LEN {
        return Err(AppError::Validation(format!(
            "Name can not be more than {} characters",
            HOTEL_NAME_MAX_LEN
        )));
    }
    Ok(name)
}

fn validate_postal_code(postal_code: Option<String>) -> Result<Option<String>, AppError> {
    let postal_code = normalize(postal_code);
    if let Some(code) = &postal_code {
        if code.chars().count() > POSTAL_CODE_MAX_LEN {
            return Err(AppError::Validation(format!(
                "Postal code can not be more than {} digits",
                POSTAL_CODE_MAX_LEN
            )));
        }
    }
    Ok(postal_code)
}

/// Trims optional text; blank becomes `None`.
fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Stages of removing a hotel together with its bookings.
///
/// `Pending -> NotFound` or `Pending -> ChildrenPurged -> ParentDeleted`.
/// The two deletes are separate statements: a failure after `ChildrenPurged`
/// leaves the hotel in place without any bookings. Re-issuing the delete is
/// safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeStage {
    Pending,
    NotFound,
    ChildrenPurged { bookings_removed: u64 },
    ParentDeleted { bookings_removed: u64 },
}
