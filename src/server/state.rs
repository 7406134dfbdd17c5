//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::util::password::PasswordHasher;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool
/// (clones share the pool) and the rest are small `Copy` values.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Argon2id hasher used by registration, login and the admin bootstrap.
    pub password_hasher: PasswordHasher,

    /// Booking cap for non-admin users.
    pub max_bookings_per_user: u64,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `password_hasher` - Password hasher
    /// - `max_bookings_per_user` - Booking cap for non-admin users
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        password_hasher: PasswordHasher,
        max_bookings_per_user: u64,
    ) -> Self {
        Self {
            db,
            password_hasher,
            max_bookings_per_user,
        }
    }
}
