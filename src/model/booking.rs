use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Hotel fields embedded in booking responses.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookingHotelDto {
    pub id: i32,
    pub name: String,
    pub province: Option<String>,
    pub tel: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub booking_date: DateTime<Utc>,
    pub user_id: i32,
    pub hotel_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel: Option<BookingHotelDto>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateBookingDto {
    pub booking_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateBookingDto {
    pub booking_date: Option<DateTime<Utc>>,
}
