use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_http::cors::CorsLayer;
use tower_sessions::{ExpiredDeletion, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::auth::AuthService,
    util::password::PasswordHasher,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions expire after seven days of inactivity. A background task removes
/// expired sessions from the store every minute.
///
/// # Arguments
/// - `db` - Connected database; the session table shares its pool
/// - `config` - Supplies the `Secure` cookie flag
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to wrap the API router with
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    tokio::task::spawn(
        session_store
            .clone()
            .continuously_delete_expired(tokio::time::Duration::from_secs(60)),
    );

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(config.session_secure)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Builds the CORS layer.
///
/// Without `CORS_ORIGIN` any origin may call the API but cookies are not
/// shared cross-origin. With it, only that origin is allowed and credentials
/// are permitted so the session cookie works from the frontend.
///
/// # Returns
/// - `Ok(CorsLayer)` - Configured layer
/// - `Err(ConfigError::InvalidEnvVar)` - `CORS_ORIGIN` is not a valid header value
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let Some(origin) = &config.cors_origin else {
        tracing::debug!("Enabling permissive CORS");
        return Ok(CorsLayer::permissive());
    };

    let origin = HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
        name: "CORS_ORIGIN".to_string(),
        value: origin.clone(),
        reason: e.to_string(),
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Seeds the configured admin account on first start.
///
/// Does nothing when an admin already exists. When none exists and
/// `ADMIN_EMAIL` / `ADMIN_PASSWORD` are not both set, a warning is logged
/// since admin-only endpoints are then unusable.
///
/// # Returns
/// - `Ok(())` - Admin present or seeded, or bootstrap skipped
/// - `Err(AppError)` - Database error or admin password too short
pub async fn check_for_admin(
    db: &DatabaseConnection,
    config: &Config,
    hasher: &PasswordHasher,
) -> Result<(), AppError> {
    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        if !crate::server::data::user::UserRepository::new(db)
            .admin_exists()
            .await?
        {
            tracing::warn!(
                "No admin account exists; set ADMIN_EMAIL and ADMIN_PASSWORD to create one"
            );
        }
        return Ok(());
    };

    if let Some(admin) = AuthService::new(db, hasher)
        .seed_admin(email, password)
        .await?
    {
        tracing::info!("Created admin account {}", admin.email);
    }

    Ok(())
}
