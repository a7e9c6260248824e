//! Database models - SQLx-compatible structs for PostgreSQL tables

mod club;
mod club_claim;
mod match_model;
mod player;
mod result;
mod roster;

pub use club::ClubModel;
pub use club_claim::ClubClaimRequestModel;
pub use match_model::MatchModel;
pub use player::PlayerModel;
pub use result::{MatchResultModel, PlayedMatchModel};
pub use roster::RosterEntryModel;
