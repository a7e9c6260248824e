//! Domain entities - core business objects

mod club;
mod club_claim;
mod location;
mod match_entity;
mod player;
mod result;
mod roster;

pub use club::{Club, ClubClaimStatus};
pub use club_claim::{ClaimRequestStatus, ClubClaimRequest};
pub use location::Location;
pub use match_entity::{Match, MatchStatus};
pub use player::{Player, PlayingPosition};
pub use result::MatchResult;
pub use roster::RosterEntry;
