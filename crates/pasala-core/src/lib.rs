//! # pasala-core
//!
//! Domain layer for match tracking: matches, rosters, results, player identities,
//! clubs and their claim workflow. This crate has zero dependencies on
//! infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ClaimRequestStatus, Club, ClubClaimRequest, ClubClaimStatus, Location, Match, MatchResult,
    MatchStatus, Player, PlayingPosition, RosterEntry,
};
pub use error::DomainError;
pub use traits::{
    ClaimOutcome, ClubClaimRepository, ClubRepository, MatchRepository, PlayedMatch,
    PlayerRepository, RepoResult, ResultRepository, RosterRepository,
};
pub use value_objects::{
    name_similarity, names_overlap, normalize_name, AccountId, ClaimRequestId, ClubId,
    IdParseError, MatchFormat, MatchId, PlayerId, RosterRequirement, SetScore, Team,
};
