//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Ids arrive as opaque strings and are parsed by the services.

use chrono::{DateTime, Utc};
use pasala_core::{Location, PlayingPosition, SetScore, Team};
use serde::Deserialize;
use validator::{Validate, ValidationError};

fn validate_location(location: &Location) -> Result<(), ValidationError> {
    let fields = [
        location.country.as_deref(),
        location.region.as_deref(),
        location.city.as_deref(),
        location.geo_id.as_deref(),
    ];
    if fields.into_iter().flatten().any(|value| value.len() > 120) {
        return Err(ValidationError::new("location_too_long")
            .with_message("Location fields must be at most 120 characters".into()));
    }
    Ok(())
}

// ============================================================================
// Match Requests
// ============================================================================

/// Create match request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMatchRequest {
    pub scheduled_at: DateTime<Utc>,

    #[validate(range(min = 2, max = 4, message = "max_players must be 2 or 4"))]
    pub max_players: i32,

    /// Known club; takes precedence over `venue`
    pub club_id: Option<String>,

    /// Free-text venue, matched or synthesized into a club
    #[validate(length(min = 1, max = 120, message = "Venue must be 1-120 characters"))]
    pub venue: Option<String>,

    #[validate(length(max = 1000, message = "Notes must be at most 1000 characters"))]
    pub notes: Option<String>,
}

/// One roster slot in the quick record flow: an existing player or a new guest
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuickRosterSlot {
    pub player_id: Option<String>,

    #[validate(length(min = 1, max = 80, message = "Guest name must be 1-80 characters"))]
    pub guest_name: Option<String>,
}

/// Record a played match, its roster and its result in one call
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuickMatchRequest {
    /// Defaults to now
    pub scheduled_at: Option<DateTime<Utc>>,

    #[validate(range(min = 2, max = 4, message = "max_players must be 2 or 4"))]
    pub max_players: i32,

    pub club_id: Option<String>,

    #[validate(length(min = 1, max = 120, message = "Venue must be 1-120 characters"))]
    pub venue: Option<String>,

    #[validate(length(max = 1000, message = "Notes must be at most 1000 characters"))]
    pub notes: Option<String>,

    #[validate(nested)]
    #[serde(default)]
    pub team_a: Vec<QuickRosterSlot>,

    #[validate(nested)]
    #[serde(default)]
    pub team_b: Vec<QuickRosterSlot>,

    #[validate(length(min = 1, max = 5, message = "Between 1 and 5 sets are required"))]
    pub sets: Vec<SetScore>,

    /// Informational only; the winner is always derived from the sets
    pub winner_team: Option<Team>,
}

/// Add a player to one side of a match
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddRosterPlayerRequest {
    /// Must match the path when present
    pub match_id: Option<String>,

    pub player_id: String,

    pub team: Team,
}

/// Submit or replace the result of a match
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitResultRequest {
    /// Must match the path when present
    pub match_id: Option<String>,

    #[validate(length(min = 1, max = 5, message = "Between 1 and 5 sets are required"))]
    pub sets: Vec<SetScore>,

    /// Informational only; the winner is always derived from the sets
    pub winner_team: Option<Team>,
}

// ============================================================================
// Player Requests
// ============================================================================

/// Create a guest identity on behalf of someone without an account
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGuestRequest {
    #[validate(length(min = 1, max = 80, message = "Display name must be 1-80 characters"))]
    pub display_name: Option<String>,

    #[validate(length(min = 1, max = 60, message = "First name must be 1-60 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 60, message = "Last name must be 1-60 characters"))]
    pub last_name: Option<String>,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,

    pub position: Option<PlayingPosition>,

    #[validate(custom(function = "validate_location"))]
    pub location: Option<Location>,
}

/// Create the caller's own identity (onboarding)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProfileRequest {
    #[validate(length(min = 1, max = 80, message = "Display name must be 1-80 characters"))]
    pub display_name: Option<String>,

    #[validate(length(min = 1, max = 60, message = "First name must be 1-60 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 60, message = "Last name must be 1-60 characters"))]
    pub last_name: Option<String>,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,

    pub position: Option<PlayingPosition>,

    #[validate(range(min = 1, max = 7, message = "skill_category must be between 1 and 7"))]
    pub skill_category: Option<i16>,

    #[validate(custom(function = "validate_location"))]
    pub location: Option<Location>,

    #[validate(url(message = "avatar_url must be a valid URL"))]
    pub avatar_url: Option<String>,
}

// ============================================================================
// Claim Requests
// ============================================================================

/// Claim an unclaimed identity. Supplying a name makes it a guided claim.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ClaimProfileRequest {
    pub target_player_id: String,

    /// Restrict the claim to identities rostered in this match
    pub match_id: Option<String>,

    #[validate(length(min = 1, max = 60, message = "First name must be 1-60 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 60, message = "Last name must be 1-60 characters"))]
    pub last_name: Option<String>,

    #[validate(length(max = 120, message = "City must be at most 120 characters"))]
    pub city: Option<String>,
}

impl ClaimProfileRequest {
    /// A request carrying any identity field goes through the guided checks
    pub fn is_guided(&self) -> bool {
        self.first_name.is_some() || self.last_name.is_some()
    }
}

/// Search unclaimed identities that may belong to the caller
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ClaimCandidatesQuery {
    #[validate(length(min = 1, max = 60, message = "First name must be 1-60 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 60, message = "Last name must be 1-60 characters"))]
    pub last_name: String,

    #[validate(length(max = 120, message = "City must be at most 120 characters"))]
    pub city: Option<String>,
}

// ============================================================================
// Club Requests
// ============================================================================

/// Create club request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClubRequest {
    #[validate(length(min = 1, max = 120, message = "Club name must be 1-120 characters"))]
    pub name: String,

    #[validate(custom(function = "validate_location"))]
    pub location: Option<Location>,

    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    pub address: Option<String>,
}

/// Ask to take operational control of a club
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RequestClubClaimRequest {
    #[validate(length(min = 1, max = 120, message = "Contact name must be 1-120 characters"))]
    pub contact_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub contact_email: String,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub contact_phone: Option<String>,

    #[validate(length(max = 2000, message = "Message must be at most 2000 characters"))]
    pub message: Option<String>,
}

/// Moderator decision on a club claim request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClubClaimDecision {
    Approved,
    Rejected,
}

/// Resolve a pending club claim request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResolveClubClaimRequest {
    pub decision: ClubClaimDecision,

    #[validate(length(max = 1000, message = "Note must be at most 1000 characters"))]
    pub note: Option<String>,
}

/// Advisory duplicate detection for clubs
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ClubCandidatesQuery {
    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    pub name: String,

    pub city: Option<String>,

    pub region: Option<String>,

    pub exclude_club_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_result_requires_sets() {
        let request: SubmitResultRequest =
            serde_json::from_str(r#"{"sets": [], "winner_team": "A"}"#).unwrap();
        assert!(request.validate().is_err());

        let request: SubmitResultRequest =
            serde_json::from_str(r#"{"sets": [{"a": 6, "b": 4}, {"a": 6, "b": 2}]}"#).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.sets[1], SetScore::new(6, 2));
    }

    #[test]
    fn test_roster_team_is_restricted() {
        let parsed = serde_json::from_str::<AddRosterPlayerRequest>(
            r#"{"player_id": "x", "team": "C"}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_max_players_range() {
        let request: CreateMatchRequest = serde_json::from_str(
            r#"{"scheduled_at": "2026-03-01T18:00:00Z", "max_players": 6}"#,
        )
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_quick_match_validates_slots() {
        let request: QuickMatchRequest = serde_json::from_str(
            r#"{"max_players": 2, "team_a": [{"guest_name": ""}], "sets": [{"a": 6, "b": 1}]}"#,
        )
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_guided_claim_detection() {
        let request: ClaimProfileRequest =
            serde_json::from_str(r#"{"target_player_id": "x"}"#).unwrap();
        assert!(!request.is_guided());

        let request: ClaimProfileRequest = serde_json::from_str(
            r#"{"target_player_id": "x", "first_name": "Ana", "last_name": "Ruiz"}"#,
        )
        .unwrap();
        assert!(request.is_guided());
    }

    #[test]
    fn test_club_claim_contact_email() {
        let request = RequestClubClaimRequest {
            contact_name: "Owner".to_string(),
            contact_email: "not-an-email".to_string(),
            contact_phone: None,
            message: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_location_length_is_bounded() {
        let request = CreateClubRequest {
            name: "Club".to_string(),
            location: Some(Location::city("x".repeat(200))),
            address: None,
        };
        assert!(request.validate().is_err());
    }
}
