use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{DataResponse, EmptyDto, ErrorDto},
        user::{LoginDto, RegisterDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::RegisterParams,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account and log it in.
///
/// New accounts always get the `user` role.
///
/// # Returns
/// - `201 Created` - The new user; the session cookie is set
/// - `400 Bad Request` - Missing name, malformed email, short password or email taken
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Successfully registered", body = DataResponse<UserDto>),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<RegisterDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = RegisterParams::from_dto(payload)?;

    let user = AuthService::new(&state.db, &state.password_hasher)
        .register(params)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(user.into_dto()))))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - The user; the session cookie is set
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = DataResponse<UserDto>),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let user = AuthService::new(&state.db, &state.password_hasher)
        .login(&payload.email, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(user.into_dto()))))
}

/// Log out by discarding the session.
///
/// Succeeds whether or not a user was logged in.
#[utoipa::path(
    get,
    path = "/api/v1/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Successfully logged out", body = DataResponse<EmptyDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok((StatusCode::OK, Json(DataResponse::new(EmptyDto::default()))))
}

/// Get the logged-in user.
///
/// # Returns
/// - `200 OK` - The current user
/// - `401 Unauthorized` - No user in session
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = DataResponse<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(user.into_dto()))))
}
