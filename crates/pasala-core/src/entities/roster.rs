//! Roster entry - a player assigned to one team of a match

use chrono::{DateTime, Utc};

use crate::value_objects::{MatchId, PlayerId, Team};

/// Active roster entry. Removed entries are soft-deleted and never loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub match_id: MatchId,
    pub player_id: PlayerId,
    pub team: Team,
    pub joined_at: DateTime<Utc>,
}

impl RosterEntry {
    pub fn new(match_id: MatchId, player_id: PlayerId, team: Team) -> Self {
        Self {
            match_id,
            player_id,
            team,
            joined_at: Utc::now(),
        }
    }

    /// Count entries per team as `(team_a, team_b)`
    pub fn team_counts(entries: &[Self]) -> (usize, usize) {
        entries.iter().fold((0, 0), |(a, b), entry| match entry.team {
            Team::A => (a + 1, b),
            Team::B => (a, b + 1),
        })
    }
}
