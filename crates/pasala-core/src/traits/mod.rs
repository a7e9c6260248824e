//! Traits (ports) implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    ClaimOutcome, ClubClaimRepository, ClubRepository, MatchRepository, PlayedMatch,
    PlayerRepository, RepoResult, ResultRepository, RosterRepository,
};
