//! Schema migrations
//!
//! SQL files live in `crates/pasala-db/migrations` and are loaded at runtime, so
//! the crate builds without a database.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use std::path::Path;

/// Directory holding the migration files
pub const MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

/// Apply every pending migration
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    let migrator = Migrator::new(Path::new(MIGRATIONS_DIR)).await?;
    tracing::info!(count = migrator.iter().count(), "Applying database migrations");
    migrator.run(pool).await?;
    tracing::info!("Database migrations completed");
    Ok(())
}
