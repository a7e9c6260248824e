//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in pasala-core.
//! Every check-then-write runs inside one transaction or one guarded statement.

mod club;
mod club_claim;
mod error;
mod match_repo;
mod player;
mod result;
mod roster;

pub use club::PgClubRepository;
pub use club_claim::PgClubClaimRepository;
pub use match_repo::PgMatchRepository;
pub use player::PgPlayerRepository;
pub use result::PgResultRepository;
pub use roster::PgRosterRepository;
