//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod admin;
pub mod claims;
pub mod clubs;
pub mod health;
pub mod matches;
pub mod players;
pub mod results;
pub mod roster;
