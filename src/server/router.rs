use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{auth::*, booking::*, hotel::*},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hotel Booking API",
        description = "Browse hotels, manage accounts and book stays"
    ),
    tags(
        (name = HOTEL_TAG, description = "Hotel catalogue"),
        (name = BOOKING_TAG, description = "Bookings of the logged-in user"),
        (name = AUTH_TAG, description = "Registration, login and sessions")
    )
)]
pub struct ApiDoc;

/// Builds the API routes together with their OpenAPI document.
///
/// # Returns
/// - `Router<AppState>` - All `/api/v1` routes, still missing state and layers
/// - `OpenApi` - Document describing those routes, served by Swagger UI
pub fn router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(get_hotels, create_hotel))
        .routes(routes!(get_hotel, update_hotel, delete_hotel))
        .routes(routes!(get_hotel_bookings, create_booking))
        .routes(routes!(get_bookings))
        .routes(routes!(get_booking, update_booking, delete_booking))
        .routes(routes!(register))
        .routes(routes!(login))
        .routes(routes!(logout))
        .routes(routes!(get_me))
        .split_for_parts()
}
