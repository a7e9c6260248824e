//! Club entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{normalize_name, AccountId, ClubId};

use super::location::Location;

/// Ownership state of a club
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClubClaimStatus {
    #[default]
    Unclaimed,
    Pending,
    Claimed,
    Rejected,
}

impl ClubClaimStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unclaimed => "unclaimed",
            Self::Pending => "pending",
            Self::Claimed => "claimed",
            Self::Rejected => "rejected",
        }
    }
}

impl From<&str> for ClubClaimStatus {
    fn from(value: &str) -> Self {
        match value {
            "pending" => Self::Pending,
            "claimed" => Self::Claimed,
            "rejected" => Self::Rejected,
            _ => Self::Unclaimed,
        }
    }
}

/// Club entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    pub normalized_name: String,
    pub location: Location,
    pub address: Option<String>,
    pub claim_status: ClubClaimStatus,
    pub created_by: Option<AccountId>,
    pub claimed_by: Option<AccountId>,
    pub claimed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Club {
    pub fn new(id: ClubId, name: String, created_by: Option<AccountId>) -> Result<Self, DomainError> {
        let name = name.trim().to_string();
        let normalized_name = normalize_name(&name);
        if normalized_name.is_empty() {
            return Err(DomainError::ValidationError(
                "club name cannot be empty".to_string(),
            ));
        }
        let now = Utc::now();
        Ok(Self {
            id,
            name,
            normalized_name,
            location: Location::default(),
            address: None,
            claim_status: ClubClaimStatus::Unclaimed,
            created_by,
            claimed_by: None,
            claimed_at: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        })
    }

    /// Fail unless a new claim request may be opened for this club
    pub fn ensure_claimable(&self) -> Result<(), DomainError> {
        match self.claim_status {
            ClubClaimStatus::Claimed => Err(DomainError::ClubAlreadyClaimed),
            ClubClaimStatus::Pending => Err(DomainError::ClubClaimInReview),
            ClubClaimStatus::Unclaimed | ClubClaimStatus::Rejected => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_club_normalizes_name() {
        let club = Club::new(ClubId::new(), "  Pádel Norte ".to_string(), None).unwrap();
        assert_eq!(club.name, "Pádel Norte");
        assert_eq!(club.normalized_name, "padel norte");
        assert_eq!(club.claim_status, ClubClaimStatus::Unclaimed);
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(Club::new(ClubId::new(), " -- ".to_string(), None).is_err());
    }

    #[test]
    fn test_ensure_claimable() {
        let mut club = Club::new(ClubId::new(), "Club".to_string(), None).unwrap();
        assert!(club.ensure_claimable().is_ok());

        club.claim_status = ClubClaimStatus::Pending;
        assert!(matches!(club.ensure_claimable(), Err(DomainError::ClubClaimInReview)));

        club.claim_status = ClubClaimStatus::Claimed;
        assert!(matches!(club.ensure_claimable(), Err(DomainError::ClubAlreadyClaimed)));

        club.claim_status = ClubClaimStatus::Rejected;
        assert!(club.ensure_claimable().is_ok());
    }
}
