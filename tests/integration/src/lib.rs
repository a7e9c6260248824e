//! Integration test utilities for the PASALA API
//!
//! Spawns the real server against PostgreSQL and drives it over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
