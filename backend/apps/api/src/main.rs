//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod app;
mod cli;

use std::net::SocketAddr;
use std::sync::Arc;

use auth::PgAuthRepository;
use auth::application::TokenService;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout::PgWorkoutRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file before clap reads the environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,workout=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let matches = cli::new().get_matches();
    let (server_config, auth_config) = cli::settings(&matches)?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(server_config.max_connections)
        .connect(&server_config.dsn)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let auth_repo = Arc::new(PgAuthRepository::new(pool.clone()));
    let workout_repo = Arc::new(PgWorkoutRepository::new(pool));

    // Startup cleanup: remove expired tokens
    // Errors here should not prevent server startup
    if let Err(e) = TokenService::new(auth_repo.clone()).cleanup_expired().await {
        tracing::warn!(error = %e, "Token cleanup failed, continuing anyway");
    }

    tracing::info!(
        token_ttl_secs = auth_config.token_ttl.as_secs(),
        peppered = auth_config.password_pepper.is_some(),
        "Auth configured"
    );

    let app = app::router(auth_repo, workout_repo, Arc::new(auth_config));
    let app = app::with_http_layers(app, server_config.cors_origins);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], server_config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
