//! Set score value object

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

use super::team::Team;

/// Games won by each side in a single set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScore {
    pub a: i32,
    pub b: i32,
}

impl SetScore {
    pub const fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }

    /// Reject negative or tied sets
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.a < 0 || self.b < 0 {
            return Err(DomainError::InvalidScores(format!(
                "set scores must be non-negative, got {}-{}",
                self.a, self.b
            )));
        }
        if self.a == self.b {
            return Err(DomainError::InvalidScores(format!(
                "a set cannot end tied ({}-{})",
                self.a, self.b
            )));
        }
        Ok(())
    }

    /// Side that took the set, `None` for a tie
    pub fn winner(&self) -> Option<Team> {
        match self.a.cmp(&self.b) {
            std::cmp::Ordering::Greater => Some(Team::A),
            std::cmp::Ordering::Less => Some(Team::B),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Games won by the given side
    pub const fn games_for(&self, team: Team) -> i32 {
        match team {
            Team::A => self.a,
            Team::B => self.b,
        }
    }
}
