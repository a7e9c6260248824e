//! Match entity - a single padel match between two fixed teams

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{AccountId, ClubId, MatchId, PlayerId, Team};

use super::roster::RosterEntry;

/// Allowed roster sizes: singles or doubles
pub const ALLOWED_CAPACITIES: [i32; 2] = [2, 4];

/// Match lifecycle status.
///
/// `Completed` is derived from the presence of a stored result; `Cancelled` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

impl MatchStatus {
    /// Database representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl From<&str> for MatchStatus {
    fn from(value: &str) -> Self {
        match value {
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            _ => Self::Scheduled,
        }
    }
}

/// Match entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub id: MatchId,
    pub scheduled_at: DateTime<Utc>,
    pub club_id: Option<ClubId>,
    pub venue: Option<String>,
    pub max_players: i32,
    pub notes: Option<String>,
    pub status: MatchStatus,
    pub created_by: AccountId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Match {
    /// Create a new scheduled match with an empty roster
    pub fn new(
        id: MatchId,
        created_by: AccountId,
        scheduled_at: DateTime<Utc>,
        max_players: i32,
    ) -> Result<Self, DomainError> {
        Self::validate_capacity(max_players)?;
        let now = Utc::now();
        Ok(Self {
            id,
            scheduled_at,
            club_id: None,
            venue: None,
            max_players,
            notes: None,
            status: MatchStatus::Scheduled,
            created_by,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        })
    }

    /// Validate a roster size
    pub fn validate_capacity(max_players: i32) -> Result<(), DomainError> {
        if ALLOWED_CAPACITIES.contains(&max_players) {
            Ok(())
        } else {
            Err(DomainError::InvalidCapacity(max_players))
        }
    }

    /// Slots per team: `ceil(max_players / 2)`
    #[inline]
    pub fn team_capacity(&self) -> usize {
        usize::try_from((self.max_players + 1) / 2).unwrap_or(0)
    }

    /// Total roster slots
    #[inline]
    pub fn total_capacity(&self) -> usize {
        usize::try_from(self.max_players).unwrap_or(0)
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.status == MatchStatus::Cancelled
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Fail with `MatchCancelled` when the match no longer accepts roster or result writes
    pub fn ensure_open(&self) -> Result<(), DomainError> {
        if self.is_cancelled() {
            Err(DomainError::MatchCancelled)
        } else {
            Ok(())
        }
    }

    /// Check that `player_id` may join `team` given the current active roster.
    ///
    /// Order matters: a cancelled match is reported before duplicates, duplicates
    /// before capacity.
    pub fn check_roster_slot(
        &self,
        roster: &[RosterEntry],
        player_id: PlayerId,
        team: Team,
    ) -> Result<(), DomainError> {
        self.ensure_open()?;
        if roster.iter().any(|entry| entry.player_id == player_id) {
            return Err(DomainError::DuplicatePlayer);
        }
        let capacity = self.team_capacity();
        let on_team = roster.iter().filter(|entry| entry.team == team).count();
        if on_team >= capacity || roster.len() >= self.total_capacity() {
            return Err(DomainError::CapacityExceeded { team, capacity });
        }
        Ok(())
    }

    /// Move to the terminal cancelled state
    pub fn cancel(&mut self) {
        self.status = MatchStatus::Cancelled;
        self.updated_at = Utc::now();
    }
}
