use axum::{
    extract::{rejection::JsonRejection, Path, RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{DataResponse, EmptyDto, ErrorDto},
        hotel::{CreateHotelDto, HotelDto, HotelListResponse, UpdateHotelDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            hotel::{CreateHotelParams, UpdateHotelParams},
            query::ListRequestParams,
        },
        service::hotel::HotelService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping hotel endpoints in OpenAPI documentation
pub static HOTEL_TAG: &str = "hotel";

/// List hotels.
///
/// Supports field filters with optional operator suffixes (`postal_code[gte]=10000`,
/// `region[in]=North,South`), `select` for a comma separated projection, `sort`
/// with `-` for descending keys, and `page` / `limit` pagination. Each hotel
/// includes its bookings.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Raw query string, translated into filters, projection, sort and window
///
/// # Returns
/// - `200 OK` - Page of hotels with count and pagination summary
/// - `400 Bad Request` - Unknown field, ill-typed value or empty `in` list
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/hotels",
    tag = HOTEL_TAG,
    params(
        ("select" = Option<String>, Query, description = "Comma separated fields to return"),
        ("sort" = Option<String>, Query, description = "Comma separated sort keys, prefix with - for descending (default: -created_at)"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 25)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved hotels", body = HotelListResponse),
        (status = 400, description = "Malformed list query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotels(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let params = ListRequestParams::from_query(query.as_deref());

    let page = HotelService::new(&state.db).list(&params).await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Get a single hotel.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - The hotel
/// - `400 Bad Request` - No hotel with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/hotels/{id}",
    tag = HOTEL_TAG,
    params(
        ("id" = i32, Path, description = "Hotel id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved hotel", body = DataResponse<HotelDto>),
        (status = 400, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("hotel", &id)?;

    let hotel = HotelService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(hotel.into_dto()))))
}

/// Create a hotel.
///
/// # Access Control
/// - `Admin` - Only admins can create hotels
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Hotel fields; `name` and `address` are required
///
/// # Returns
/// - `201 Created` - The created hotel
/// - `400 Bad Request` - Missing field, field too long or duplicate name
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/hotels",
    tag = HOTEL_TAG,
    request_body = CreateHotelDto,
    responses(
        (status = 201, description = "Successfully created hotel", body = DataResponse<HotelDto>),
        (status = 400, description = "Invalid hotel data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_hotel(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CreateHotelDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    let params = CreateHotelParams::from_dto(payload)?;

    let hotel = HotelService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(hotel.into_dto()))))
}

/// Update a hotel.
///
/// Only fields present in the payload are changed.
///
/// # Access Control
/// - `Admin` - Only admins can update hotels
///
/// # Returns
/// - `200 OK` - The updated hotel
/// - `400 Bad Request` - Hotel not found or invalid data
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/hotels/{id}",
    tag = HOTEL_TAG,
    params(
        ("id" = i32, Path, description = "Hotel id")
    ),
    request_body = UpdateHotelDto,
    responses(
        (status = 200, description = "Successfully updated hotel", body = DataResponse<HotelDto>),
        (status = 400, description = "Hotel not found or invalid data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_hotel(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    payload: Result<Json<UpdateHotelDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let id = parse_id("hotel", &id)?;
    let Json(payload) = payload?;
    let params = UpdateHotelParams::from_dto(id, payload)?;

    let hotel = HotelService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(hotel.into_dto()))))
}

/// Delete a hotel together with its bookings.
///
/// Bookings are removed first, then the hotel.
///
/// # Access Control
/// - `Admin` - Only admins can delete hotels
///
/// # Returns
/// - `200 OK` - Hotel and bookings removed, `data` is an empty object
/// - `400 Bad Request` - Hotel not found
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/hotels/{id}",
    tag = HOTEL_TAG,
    params(
        ("id" = i32, Path, description = "Hotel id")
    ),
    responses(
        (status = 200, description = "Successfully deleted hotel", body = DataResponse<EmptyDto>),
        (status = 400, description = "Hotel not found", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_hotel(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let id = parse_id("hotel", &id)?;

    HotelService::new(&state.db).delete_with_children(id).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(EmptyDto::default()))))
}
