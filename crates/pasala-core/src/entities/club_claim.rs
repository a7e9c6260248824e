//! Club claim request - an ownership request waiting for moderation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{AccountId, ClaimRequestId, ClubId};

/// Moderation state of a claim request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClaimRequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ClaimRequestStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl From<&str> for ClaimRequestStatus {
    fn from(value: &str) -> Self {
        match value {
            "approved" => Self::Approved,
            "rejected" => Self::Rejected,
            _ => Self::Pending,
        }
    }
}

/// Club claim request entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubClaimRequest {
    pub id: ClaimRequestId,
    pub club_id: ClubId,
    pub requester: AccountId,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub message: Option<String>,
    pub status: ClaimRequestStatus,
    pub resolved_by: Option<AccountId>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub resolution_note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ClubClaimRequest {
    pub fn new(
        id: ClaimRequestId,
        club_id: ClubId,
        requester: AccountId,
        contact_name: String,
        contact_email: String,
    ) -> Self {
        Self {
            id,
            club_id,
            requester,
            contact_name,
            contact_email,
            contact_phone: None,
            message: None,
            status: ClaimRequestStatus::Pending,
            resolved_by: None,
            resolved_at: None,
            resolution_note: None,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == ClaimRequestStatus::Pending
    }

    /// Fail with `ClaimAlreadyResolved` once moderation has happened
    pub fn ensure_pending(&self) -> Result<(), DomainError> {
        if self.is_pending() {
            Ok(())
        } else {
            Err(DomainError::ClaimAlreadyResolved)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request_is_pending() {
        let request = ClubClaimRequest::new(
            ClaimRequestId::new(),
            ClubId::new(),
            AccountId::new(),
            "Owner".to_string(),
            "owner@club.test".to_string(),
        );
        assert!(request.ensure_pending().is_ok());
    }

    #[test]
    fn test_resolved_request_cannot_be_resolved_again() {
        let mut request = ClubClaimRequest::new(
            ClaimRequestId::new(),
            ClubId::new(),
            AccountId::new(),
            "Owner".to_string(),
            "owner@club.test".to_string(),
        );
        request.status = ClaimRequestStatus::Rejected;
        assert!(matches!(request.ensure_pending(), Err(DomainError::ClaimAlreadyResolved)));
    }
}
