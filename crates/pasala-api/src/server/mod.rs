//! Server setup and initialization
//!
//! Connects the database, wires repositories into the service context and runs
//! the HTTP server until ctrl-c.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use pasala_common::{AppConfig, AppError, JwtService};
use pasala_db::{
    create_pool, run_migrations, PgClubClaimRepository, PgClubRepository, PgMatchRepository,
    PgPlayerRepository, PgResultRepository, PgRosterRepository,
};
use pasala_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_api_middleware, apply_middleware};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let timeout = config.app.request_timeout;

    let api = apply_api_middleware(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
        timeout,
    );
    let health = apply_middleware(health_routes(), timeout);

    api.merge(health).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = pasala_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(format!("migrations failed: {e}")))?;
        info!("Database migrations applied");
    } else {
        info!("Skipping database migrations (RUN_MIGRATIONS=false)");
    }

    let jwt_service = JwtService::new(&config.jwt.secret, config.jwt.leeway_secs);

    let service_context = ServiceContextBuilder::new()
        .match_repo(Arc::new(PgMatchRepository::new(pool.clone())))
        .roster_repo(Arc::new(PgRosterRepository::new(pool.clone())))
        .result_repo(Arc::new(PgResultRepository::new(pool.clone())))
        .player_repo(Arc::new(PgPlayerRepository::new(pool.clone())))
        .club_repo(Arc::new(PgClubRepository::new(pool.clone())))
        .club_claim_repo(Arc::new(PgClubClaimRepository::new(pool.clone())))
        .domain(config.domain.clone())
        .public_base_url(config.app.public_base_url.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, jwt_service, pool, config))
}

/// Run the HTTP server until ctrl-c
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to install ctrl-c handler");
    }
    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API_HOST/API_PORT: {e}")))?;

    let state = create_app_state(config).await?;
    run_server(create_app(state), addr).await
}
