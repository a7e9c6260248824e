//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{ClaimRequestId, ClubId, MatchId, PlayerId, Team};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Match not found: {0}")]
    MatchNotFound(MatchId),

    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("Club not found: {0}")]
    ClubNotFound(ClubId),

    #[error("Club claim request not found: {0}")]
    ClaimRequestNotFound(ClaimRequestId),

    #[error("Player is not on this match roster")]
    RosterEntryNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid scores: {0}")]
    InvalidScores(String),

    #[error("Ambiguous result: sets won {won_a}-{won_b} do not decide the match")]
    AmbiguousResult { won_a: usize, won_b: usize },

    #[error("Invalid capacity: {0} (must be 2 or 4)")]
    InvalidCapacity(i32),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not a participant of this match")]
    NotMatchParticipant,

    #[error("Administrator access required")]
    AdminOnly,

    #[error("Player is not part of the given match")]
    ClaimNotAllowed,

    #[error("Identity details do not match this player")]
    ClaimIdentityMismatch,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Team {team} is full (capacity {capacity})")]
    CapacityExceeded { team: Team, capacity: usize },

    #[error("Player is already on this match roster")]
    DuplicatePlayer,

    #[error("Roster incomplete: team A has {team_a}, team B has {team_b}")]
    RosterIncomplete { team_a: usize, team_b: usize },

    #[error("Match has been cancelled")]
    MatchCancelled,

    #[error("Player profile has already been claimed")]
    ProfileAlreadyClaimed,

    #[error("Account already has a player profile")]
    UserAlreadyHasProfile,

    #[error("Club has already been claimed")]
    ClubAlreadyClaimed,

    #[error("Club already has a claim under review")]
    ClubClaimInReview,

    #[error("Claim request has already been resolved")]
    ClaimAlreadyResolved,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::MatchNotFound(_) => "MATCH_NOT_FOUND",
            Self::PlayerNotFound(_) => "PLAYER_NOT_FOUND",
            Self::ClubNotFound(_) => "CLUB_NOT_FOUND",
            Self::ClaimRequestNotFound(_) => "CLAIM_REQUEST_NOT_FOUND",
            Self::RosterEntryNotFound => "ROSTER_ENTRY_NOT_FOUND",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidScores(_) => "INVALID_SCORES",
            Self::AmbiguousResult { .. } => "AMBIGUOUS_RESULT",
            Self::InvalidCapacity(_) => "INVALID_CAPACITY",

            // Authorization
            Self::NotMatchParticipant => "NOT_MATCH_PARTICIPANT",
            Self::AdminOnly => "ADMIN_ONLY",
            Self::ClaimNotAllowed => "CLAIM_NOT_ALLOWED",
            Self::ClaimIdentityMismatch => "CLAIM_IDENTITY_MISMATCH",

            // Conflict
            Self::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            Self::DuplicatePlayer => "DUPLICATE_PLAYER",
            Self::RosterIncomplete { .. } => "ROSTER_INCOMPLETE",
            Self::MatchCancelled => "MATCH_CANCELLED",
            Self::ProfileAlreadyClaimed => "PROFILE_ALREADY_CLAIMED",
            Self::UserAlreadyHasProfile => "USER_ALREADY_HAS_PROFILE",
            Self::ClubAlreadyClaimed => "CLUB_ALREADY_CLAIMED",
            Self::ClubClaimInReview => "CLUB_CLAIM_IN_REVIEW",
            Self::ClaimAlreadyResolved => "CLAIM_ALREADY_RESOLVED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::MatchNotFound(_)
                | Self::PlayerNotFound(_)
                | Self::ClubNotFound(_)
                | Self::ClaimRequestNotFound(_)
                | Self::RosterEntryNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidScores(_)
                | Self::AmbiguousResult { .. }
                | Self::InvalidCapacity(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotMatchParticipant
                | Self::AdminOnly
                | Self::ClaimNotAllowed
                | Self::ClaimIdentityMismatch
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::CapacityExceeded { .. }
                | Self::DuplicatePlayer
                | Self::RosterIncomplete { .. }
                | Self::MatchCancelled
                | Self::ProfileAlreadyClaimed
                | Self::UserAlreadyHasProfile
                | Self::ClubAlreadyClaimed
                | Self::ClubClaimInReview
                | Self::ClaimAlreadyResolved
        )
    }
}
