//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. `AppError` is the top-level error type;
//! every variant is rendered as the uniform `{"success": false}` envelope so that
//! callers never see internal details.

pub mod auth;
pub mod config;
pub mod query;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, query::QueryError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401 / 403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Malformed filter, select, sort or pagination input.
    ///
    /// Results in 400 Bad Request carrying the error message.
    #[error(transparent)]
    QueryErr(#[from] QueryError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error, raised by the session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Server socket or other I/O failure during startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Referenced resource id does not resolve.
    ///
    /// Results in 400 Bad Request, the wire contract shared by every
    /// single-resource endpoint.
    #[error("{0}")]
    NotFound(String),

    /// Payload fails field constraints.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    Validation(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged; the client receives a bare failure envelope.
    #[error("{0}")]
    InternalError(String),
}

/// Malformed request bodies are reported like any other invalid payload.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `NotFound`, `Validation`, `QueryErr`
/// - 401 / 403 - `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - everything else, logged at error level
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new())).into_response()
            }
            Self::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::with_message(msg))).into_response()
            }
            Self::QueryErr(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::with_message(err.to_string())),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error and returns the bare failure envelope.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorDto::new())).into_response()
    }
}
