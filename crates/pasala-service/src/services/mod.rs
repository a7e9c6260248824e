//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod access;
pub mod claim;
pub mod club;
pub mod context;
pub mod error;
pub mod matches;
pub mod metrics;
pub mod player;
pub mod result;
pub mod roster;


// Re-export all services for convenience
pub use access::AccessService;
pub use claim::ClaimService;
pub use club::ClubService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use matches::{MatchService, DEFAULT_MATCH_LIMIT};
pub use metrics::MetricsService;
pub use player::PlayerService;
pub use result::ResultService;
pub use roster::RosterService;
