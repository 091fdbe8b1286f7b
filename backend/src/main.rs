//! Service entry-point: configuration, database pool, schema migrations,
//! and HTTP server wiring.

mod server;

use std::sync::Arc;

use actix_web::{web, HttpServer};
use diesel::Connection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use identity_service::domain::{UserService, Validator};
use identity_service::inbound::http::health::HealthState;
use identity_service::inbound::http::state::HttpState;
use identity_service::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
use server::AppConfig;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::from_env();
    info!(
        address = %config.server_address,
        "starting identity service"
    );

    let validator = Validator::new(&config.validation)
        .map_err(|e| std::io::Error::other(format!("invalid email validation pattern: {e}")))?;

    let pool_config = PoolConfig::new(&config.database_url)
        .with_max_size(config.db_max_connections)
        .with_min_idle(Some(config.db_min_idle));
    let pool = DbPool::new(pool_config)
        .await
        .map_err(|e| std::io::Error::other(format!("database pool setup failed: {e}")))?;
    info!("connected to PostgreSQL");

    run_migrations(config.database_url.clone()).await?;
    info!("database schema is up to date");

    let repository = Arc::new(DieselUserRepository::new(pool));
    let service = Arc::new(UserService::new(repository, validator));
    let http_state = web::Data::new(HttpState::new(service));
    let health_state = web::Data::new(HealthState::new());

    // Clone for the server factory so the readiness flip below still sees
    // the shared state.
    let server_http_state = http_state.clone();
    let server_health_state = health_state.clone();
    let http_server = HttpServer::new(move || {
        server::build_app(server_http_state.clone(), server_health_state.clone())
    })
    .bind(&config.server_address)?;

    health_state.mark_ready();
    info!(address = %config.server_address, "server started");
    http_server.run().await
}

/// Apply pending schema migrations over a dedicated blocking connection.
async fn run_migrations(database_url: String) -> std::io::Result<()> {
    tokio::task::spawn_blocking(move || {
        let mut conn = diesel::pg::PgConnection::establish(&database_url)
            .map_err(|e| format!("failed to connect for migrations: {e}"))?;
        conn.run_pending_migrations(MIGRATIONS)
            .map(|_| ())
            .map_err(|e| format!("failed to run migrations: {e}"))
    })
    .await
    .map_err(|e| std::io::Error::other(e.to_string()))?
    .map_err(std::io::Error::other)
}
