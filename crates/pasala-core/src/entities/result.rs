//! Match result - the ordered set scores and the derived winner

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{AccountId, MatchFormat, MatchId, SetScore, Team};

/// Stored result of a match, one per match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub match_id: MatchId,
    pub sets: Vec<SetScore>,
    /// Denormalized at write time; always re-derivable from `sets`
    pub winner_team: Team,
    pub recorded_by: AccountId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MatchResult {
    /// Validate the sets against the format and derive the winner.
    ///
    /// A caller-supplied winner is never trusted; callers may compare it against
    /// `winner_team` for logging only.
    pub fn decide(
        match_id: MatchId,
        sets: Vec<SetScore>,
        format: MatchFormat,
        recorded_by: AccountId,
    ) -> Result<Self, DomainError> {
        let winner_team = format.decide(&sets)?;
        let now = Utc::now();
        Ok(Self {
            match_id,
            sets,
            winner_team,
            recorded_by,
            created_at: now,
            updated_at: now,
        })
    }

    /// Number of sets taken by a side
    pub fn sets_won(&self, team: Team) -> usize {
        self.sets.iter().filter(|s| s.winner() == Some(team)).count()
    }

    /// Total games taken by a side across all sets
    pub fn games_won(&self, team: Team) -> i64 {
        self.sets.iter().map(|s| i64::from(s.games_for(team))).sum()
    }
}
