//! # pasala-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model to entity mappers
//! - Repository implementations carrying the roster, result and claim atomicity
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pasala_db::{create_pool, run_migrations, DatabaseConfig, PgRosterRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from_env()).await?;
//!     run_migrations(&pool).await?;
//!     let roster_repo = PgRosterRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgClubClaimRepository, PgClubRepository, PgMatchRepository, PgPlayerRepository,
    PgResultRepository, PgRosterRepository,
};
