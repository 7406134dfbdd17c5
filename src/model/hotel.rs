use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{api::PaginationDto, booking::BookingDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HotelDto {
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

/// Hotel as returned by the list endpoint, with its bookings populated.
///
/// Only documents the full shape; `select` may drop any field except `id`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HotelListItemDto {
    #[serde(flatten)]
    pub hotel: HotelDto,
    pub bookings: Vec<BookingDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct HotelListResponse {
    pub success: bool,
    pub count: usize,
    pub pagination: PaginationDto,
    #[schema(value_type = Vec<HotelListItemDto>)]
    pub data: Vec<serde_json::Value>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateHotelDto {
    pub name: String,
    pub address: String,
    pub district: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub tel: Option<String>,
    pub region: Option<String>,
}

/// Partial update; omitted fields keep their stored value.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateHotelDto {
    pub name: Option<String>,
    pub address: Option<String>,
    pub district: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub tel: Option<String>,
    pub region: Option<String>,
}
