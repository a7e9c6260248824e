//! Value objects - immutable types that represent domain concepts

mod format;
mod ids;
mod name;
mod score;
mod team;

pub use format::{MatchFormat, RosterRequirement};
pub use ids::{AccountId, ClaimRequestId, ClubId, IdParseError, MatchId, PlayerId};
pub use name::{name_similarity, names_overlap, normalize_name};
pub use score::SetScore;
pub use team::Team;
