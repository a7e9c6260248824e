//! PASALA API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p pasala-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env` when present).

use pasala_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Configuration decides the log format, so it is loaded first
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        port = config.api.port,
        admins = config.domain.admin_account_ids.len(),
        roster_requirement = ?config.domain.result_roster_requirement,
        "Configuration loaded"
    );

    if let Err(e) = pasala_api::server::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
