use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{CollectionResponse, DataResponse, EmptyDto, ErrorDto},
        booking::{BookingDto, CreateBookingDto, UpdateBookingDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::booking::{CreateBookingParams, UpdateBookingParams},
        service::booking::BookingService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// List bookings visible to the caller.
///
/// # Access Control
/// - Logged in; admins see every booking, users only their own
///
/// # Returns
/// - `200 OK` - Bookings with hotel summary
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Successfully retrieved bookings", body = CollectionResponse<BookingDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let bookings = BookingService::new(&state.db, state.max_bookings_per_user)
        .list(&user, None)
        .await?;

    let bookings = bookings.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(CollectionResponse::new(bookings))))
}

/// List bookings of one hotel visible to the caller.
///
/// # Access Control
/// - Logged in; admins see every booking, users only their own
///
/// # Returns
/// - `200 OK` - Bookings of the hotel
/// - `400 Bad Request` - Hotel not found
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/hotels/{id}/bookings",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Hotel id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved bookings", body = CollectionResponse<BookingDto>),
        (status = 400, description = "Hotel not found", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotel_bookings(
    State(state): State<AppState>,
    session: Session,
    Path(hotel_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let hotel_id = parse_id("hotel", &hotel_id)?;

    let bookings = BookingService::new(&state.db, state.max_bookings_per_user)
        .list(&user, Some(hotel_id))
        .await?;

    let bookings = bookings.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(CollectionResponse::new(bookings))))
}

/// Book a stay at a hotel.
///
/// Non-admin users may hold a limited number of bookings.
///
/// # Access Control
/// - Logged in
///
/// # Returns
/// - `201 Created` - The created booking
/// - `400 Bad Request` - Hotel not found, invalid data or booking limit reached
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/hotels/{id}/bookings",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Hotel id")
    ),
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Successfully created booking", body = DataResponse<BookingDto>),
        (status = 400, description = "Hotel not found, invalid data or booking limit reached", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    Path(hotel_id): Path<String>,
    payload: Result<Json<CreateBookingDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let hotel_id = parse_id("hotel", &hotel_id)?;
    let Json(payload) = payload?;
    let params = CreateBookingParams::from_dto(hotel_id, user.id, payload);

    let booking = BookingService::new(&state.db, state.max_bookings_per_user)
        .create(&user, params)
        .await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(booking.into_dto()))))
}

/// Get a single booking.
///
/// # Access Control
/// - Owner or admin
///
/// # Returns
/// - `200 OK` - The booking
/// - `400 Bad Request` - Booking not found
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Booking belongs to another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved booking", body = DataResponse<BookingDto>),
        (status = 400, description = "Booking not found", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Booking belongs to another user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let id = parse_id("booking", &id)?;

    let booking = BookingService::new(&state.db, state.max_bookings_per_user)
        .get_by_id(&user, id)
        .await?;

    Ok((StatusCode::OK, Json(DataResponse::new(booking.into_dto()))))
}

/// Change the date of a booking.
///
/// # Access Control
/// - Owner or admin
///
/// # Returns
/// - `200 OK` - The updated booking
/// - `400 Bad Request` - Booking not found or invalid data
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Booking belongs to another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking id")
    ),
    request_body = UpdateBookingDto,
    responses(
        (status = 200, description = "Successfully updated booking", body = DataResponse<BookingDto>),
        (status = 400, description = "Booking not found or invalid data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Booking belongs to another user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    payload: Result<Json<UpdateBookingDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let id = parse_id("booking", &id)?;
    let Json(payload) = payload?;
    let params = UpdateBookingParams::from_dto(id, payload);

    let booking = BookingService::new(&state.db, state.max_bookings_per_user)
        .update(&user, params)
        .await?;

    Ok((StatusCode::OK, Json(DataResponse::new(booking.into_dto()))))
}

/// Cancel a booking.
///
/// # Access Control
/// - Owner or admin
///
/// # Returns
/// - `200 OK` - Booking removed, `data` is an empty object
/// - `400 Bad Request` - Booking not found
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Booking belongs to another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking id")
    ),
    responses(
        (status = 200, description = "Successfully deleted booking", body = DataResponse<EmptyDto>),
        (status = 400, description = "Booking not found", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Booking belongs to another user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let id = parse_id("booking", &id)?;

    BookingService::new(&state.db, state.max_bookings_per_user)
        .delete(&user, id)
        .await?;

    Ok((StatusCode::OK, Json(DataResponse::new(EmptyDto::default()))))
}
