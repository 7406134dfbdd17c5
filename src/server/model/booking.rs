//! Booking domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::booking::{
    BookingDto, BookingHotelDto, CreateBookingDto, UpdateBookingDto,
};

/// Hotel fields carried along with a booking.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingHotel {
    pub id: i32,
    pub name: String,
    pub province: Option<String>,
    pub tel: Option<String>,
}

impl BookingHotel {
    pub fn from_entity(entity: entity::hotel::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            province: entity.province,
            tel: entity.tel,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub booking_date: DateTime<Utc>,
    pub user_id: i32,
    pub hotel_id: i32,
    /// Present when the booking was loaded together with its hotel.
    pub hotel: Option<BookingHotel>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            booking_date: entity.booking_date,
            user_id: entity.user_id,
            hotel_id: entity.hotel_id,
            hotel: None,
            created_at: entity.created_at,
        }
    }

    pub fn from_entity_with_hotel(
        entity: entity::booking::Model,
        hotel: Option<entity::hotel::Model>,
    ) -> Self {
        Self {
            hotel: hotel.map(BookingHotel::from_entity),
            ..Self::from_entity(entity)
        }
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            booking_date: self.booking_date,
            user_id: self.user_id,
            hotel_id: self.hotel_id,
            hotel: self.hotel.map(|h| BookingHotelDto {
                id: h.id,
                name: h.name,
                province: h.province,
                tel: h.tel,
            }),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateBookingParams {
    pub hotel_id: i32,
    pub user_id: i32,
    pub booking_date: DateTime<Utc>,
}

impl CreateBookingParams {
    pub fn from_dto(hotel_id: i32, user_id: i32, dto: CreateBookingDto) -> Self {
        Self {
            hotel_id,
            user_id,
            booking_date: dto.booking_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBookingParams {
    pub id: i32,
    pub booking_date: Option<DateTime<Utc>>,
}

impl UpdateBookingParams {
    pub fn from_dto(id: i32, dto: UpdateBookingDto) -> Self {
        Self {
            id,
            booking_date: dto.booking_date,
        }
    }
}
