//! Clinic portal server entry point.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use clinic_portal::adapters::auth::JwtTokenService;
use clinic_portal::adapters::http::{portal_router, AppState};
use clinic_portal::adapters::postgres::{
    PostgresBookingRepository, PostgresCatalogReader, PostgresDoctorRepository,
    PostgresUserRepository,
};
use clinic_portal::adapters::stripe::{StripeConfig, StripePaymentAdapter};
use clinic_portal::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    tracing::info!(
        environment = ?config.server.environment,
        port = config.server.port,
        "starting clinic portal server"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let token_service = Arc::new(JwtTokenService::from_config(&config.auth));

    let state = AppState {
        catalog: Arc::new(PostgresCatalogReader::new(pool.clone())),
        bookings: Arc::new(PostgresBookingRepository::new(pool.clone())),
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        doctors: Arc::new(PostgresDoctorRepository::new(pool)),
        payments: Arc::new(StripePaymentAdapter::new(StripeConfig::from_config(
            &config.payment,
        ))),
        token_issuer: token_service.clone(),
        session_validator: token_service,
    };

    let cors = build_cors(&config);

    let app = portal_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors);

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_cors(config: &AppConfig) -> CorsLayer {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
    }
}
