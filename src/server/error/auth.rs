use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// The request did not carry a valid session cookie. Results in 401 Unauthorized.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Results in 401 Unauthorized; the stale session should be discarded by the client.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Email/password pair did not match a stored account.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The user is authenticated but lacks the required role or ownership.
    ///
    /// # Fields
    /// - User id of the caller
    /// - Server-side description of the denied action
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 "Not authorized to access this route"
/// - `InvalidCredentials` → 401 "Invalid credentials"
/// - `AccessDenied` → 403 "Not authorized to access this route"
///
/// Details are logged at debug level only.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::with_message("Not authorized to access this route")),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::with_message("Invalid credentials")),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::with_message("Not authorized to access this route")),
            )
                .into_response(),
        }
    }
}
