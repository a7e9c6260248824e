//! Match format and roster policies
//!
//! `MatchFormat` owns the "best of N sets" rule, including the early-decision case
//! where a side that already took the majority does not need the remaining sets.
//! `RosterRequirement` expresses how complete a roster must be before a result is
//! accepted; each entry point picks its own.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

use super::score::SetScore;
use super::team::Team;

/// Best-of-N sets format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchFormat {
    best_of: u8,
}

impl MatchFormat {
    /// Single deciding set
    pub const BEST_OF_ONE: Self = Self { best_of: 1 };
    /// Standard amateur padel: two sets to win
    pub const PADEL_BEST_OF_THREE: Self = Self { best_of: 3 };
    /// Three sets to win
    pub const BEST_OF_FIVE: Self = Self { best_of: 5 };

    /// Build a best-of-N format. N must be odd so a majority always exists.
    pub fn best_of(sets: u8) -> Result<Self, DomainError> {
        if sets == 0 || sets % 2 == 0 {
            return Err(DomainError::ValidationError(format!(
                "best-of format needs an odd number of sets, got {sets}"
            )));
        }
        Ok(Self { best_of: sets })
    }

    /// Maximum number of sets that can be played
    #[inline]
    pub fn max_sets(&self) -> usize {
        usize::from(self.best_of)
    }

    /// Sets needed to take the match
    #[inline]
    pub fn sets_to_win(&self) -> usize {
        usize::from(self.best_of / 2 + 1)
    }

    /// Validate the entered sets and derive the winning side.
    ///
    /// Sets after the match was already decided are accepted but never change the
    /// winner. Fewer sets than needed to decide, or a split that leaves nobody at
    /// `sets_to_win`, is `AmbiguousResult`.
    pub fn decide(&self, sets: &[SetScore]) -> Result<Team, DomainError> {
        if sets.is_empty() {
            return Err(DomainError::InvalidScores(
                "at least one set is required".to_string(),
            ));
        }
        if sets.len() > self.max_sets() {
            return Err(DomainError::InvalidScores(format!(
                "a best-of-{} match has at most {} sets, got {}",
                self.best_of,
                self.max_sets(),
                sets.len()
            )));
        }

        let mut won_a = 0usize;
        let mut won_b = 0usize;
        for set in sets {
            set.validate()?;
            if set.winner() == Some(Team::A) {
                won_a += 1;
            } else {
                won_b += 1;
            }
        }

        let needed = self.sets_to_win();
        if won_a >= needed && won_a > won_b {
            Ok(Team::A)
        } else if won_b >= needed && won_b > won_a {
            Ok(Team::B)
        } else {
            Err(DomainError::AmbiguousResult { won_a, won_b })
        }
    }
}

impl Default for MatchFormat {
    fn default() -> Self {
        Self::PADEL_BEST_OF_THREE
    }
}

/// How complete the roster must be before a result is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterRequirement {
    /// Every slot on both teams filled
    Full,
    /// Each team has at least one player
    #[default]
    BothTeams,
    /// No requirement (quick record flow builds the roster alongside the result)
    None,
}

impl RosterRequirement {
    /// Check team sizes against this requirement
    pub fn check(self, max_players: i32, team_a: usize, team_b: usize) -> Result<(), DomainError> {
        let per_team = usize::try_from((max_players + 1) / 2).unwrap_or(0);
        let satisfied = match self {
            Self::Full => team_a >= per_team && team_b >= per_team,
            Self::BothTeams => team_a > 0 && team_b > 0,
            Self::None => true,
        };
        if satisfied {
            Ok(())
        } else {
            Err(DomainError::RosterIncomplete { team_a, team_b })
        }
    }
}

impl std::str::FromStr for RosterRequirement {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "both_teams" => Ok(Self::BothTeams),
            "none" => Ok(Self::None),
            other => Err(DomainError::ValidationError(format!(
                "unknown roster requirement {other:?}"
            ))),
        }
    }
}
