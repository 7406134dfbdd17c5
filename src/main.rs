mod model;
mod server;

use std::{net::SocketAddr, time::Duration};

use tokio::signal;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tracing_subscriber::EnvFilter;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    router, startup,
    state::AppState,
    util::password::PasswordHasher,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let cors = startup::cors_layer(&config)?;
    let password_hasher = PasswordHasher::default();

    startup::check_for_admin(&db, &config, &password_hasher).await?;

    let governor_config = GovernorConfigBuilder::default()
        .per_second(config.rate_limit_period_seconds)
        .burst_size(config.rate_limit_burst)
        .finish()
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: "RATE_LIMIT_PERIOD_SECONDS / RATE_LIMIT_BURST".to_string(),
            value: format!(
                "{} / {}",
                config.rate_limit_period_seconds, config.rate_limit_burst
            ),
            reason: "period and burst must both be greater than zero".to_string(),
        })?;

    // Drop idle client buckets so the limiter does not grow without bound.
    let limiter = governor_config.limiter().clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        loop {
            interval.tick().await;
            tracing::debug!("Rate limiter tracking {} clients", limiter.len());
            limiter.retain_recent();
        }
    });

    let (api_routes, openapi) = router::router();
    let api_routes = api_routes
        .with_state(AppState::new(
            db,
            password_hasher,
            config.max_bookings_per_user,
        ))
        .layer(session)
        .layer(GovernorLayer::new(governor_config));

    let app = api_routes
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", openapi))
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
///
/// A signal handler that cannot be installed is logged and that branch never
/// resolves, leaving the other signal in charge.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
