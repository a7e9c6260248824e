//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! UUID ids serialize as strings.

use chrono::{DateTime, Utc};
use pasala_core::{
    AccountId, ClaimRequestId, ClaimRequestStatus, ClubClaimStatus, ClubId, Location, MatchId,
    MatchStatus, PlayerId, PlayingPosition, SetScore, Team,
};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Match Responses
// ============================================================================

/// Match header
#[derive(Debug, Clone, Serialize)]
pub struct MatchResponse {
    pub id: MatchId,
    pub scheduled_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club_id: Option<ClubId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    pub max_players: i32,
    pub team_capacity: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: MatchStatus,
    pub created_by: AccountId,
    pub created_at: DateTime<Utc>,
}

/// One roster slot with enough of the player to render it
#[derive(Debug, Clone, Serialize)]
pub struct RosterEntryResponse {
    pub player_id: PlayerId,
    pub display_name: String,
    pub is_guest: bool,
    pub team: Team,
    pub joined_at: DateTime<Utc>,
}

/// Both sides of a match
#[derive(Debug, Clone, Serialize)]
pub struct RosterResponse {
    pub match_id: MatchId,
    pub team_capacity: usize,
    pub team_a: Vec<RosterEntryResponse>,
    pub team_b: Vec<RosterEntryResponse>,
}

/// Stored result
#[derive(Debug, Clone, Serialize)]
pub struct ResultResponse {
    pub match_id: MatchId,
    pub sets: Vec<SetScore>,
    pub winner_team: Team,
    pub sets_won_a: usize,
    pub sets_won_b: usize,
    pub recorded_by: AccountId,
    pub updated_at: DateTime<Utc>,
}

/// Public match page: header, roster and result
#[derive(Debug, Clone, Serialize)]
pub struct MatchDetailResponse {
    #[serde(flatten)]
    pub game: MatchResponse,
    pub roster: RosterResponse,
    pub result: Option<ResultResponse>,
}

/// Outcome of the quick record flow
#[derive(Debug, Clone, Serialize)]
pub struct QuickMatchResponse {
    #[serde(flatten)]
    pub detail: MatchDetailResponse,
    /// Guests created inline, in roster order
    pub created_guests: Vec<PlayerResponse>,
}

/// Share link for a match
#[derive(Debug, Clone, Serialize)]
pub struct ShareLinkResponse {
    pub match_id: MatchId,
    pub url: String,
    pub text: String,
    pub whatsapp_url: String,
}

// ============================================================================
// Player Responses
// ============================================================================

/// Public projection of a player identity
#[derive(Debug, Clone, Serialize)]
pub struct PlayerResponse {
    pub id: PlayerId,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PlayingPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_category: Option<i16>,
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub is_guest: bool,
    pub claimed: bool,
    pub created_at: DateTime<Utc>,
}

/// The caller's own identity, including private fields
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub player: PlayerResponse,
    pub user_id: Option<AccountId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub onboarding_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimed_at: Option<DateTime<Utc>>,
}

/// Unclaimed identity that may belong to the caller
#[derive(Debug, Clone, Serialize)]
pub struct ClaimCandidateResponse {
    pub player: PlayerResponse,
    pub city_match: bool,
    pub similarity: f64,
}

/// Derived performance of a player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerMetricsResponse {
    pub player_id: PlayerId,
    pub matches_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: f64,
    pub sets_won: u32,
    pub sets_lost: u32,
    pub games_won: i64,
    pub games_lost: i64,
    /// Positive for consecutive wins, negative for consecutive losses
    pub current_streak: i32,
    pub best_win_streak: u32,
    /// Most recent first, `W` or `L`
    pub recent_form: String,
    pub pasala_index: u8,
}

// ============================================================================
// Club Responses
// ============================================================================

/// Club response
#[derive(Debug, Clone, Serialize)]
pub struct ClubResponse {
    pub id: ClubId,
    pub name: String,
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub claim_status: ClubClaimStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimed_by: Option<AccountId>,
    pub created_at: DateTime<Utc>,
}

/// Club with its upcoming and past matches
#[derive(Debug, Clone, Serialize)]
pub struct ClubCalendarResponse {
    pub club: ClubResponse,
    pub matches: Vec<MatchResponse>,
}

/// Existing club that may duplicate the one being claimed or created
#[derive(Debug, Clone, Serialize)]
pub struct ClubCandidateResponse {
    pub club: ClubResponse,
    pub location_match: bool,
    pub similarity: f64,
}

/// Club claim request
#[derive(Debug, Clone, Serialize)]
pub struct ClubClaimRequestResponse {
    pub id: ClaimRequestId,
    pub club_id: ClubId,
    pub requester: AccountId,
    pub contact_name: String,
    pub contact_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: ClaimRequestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_by: Option<AccountId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution_note: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub database: String,
}

impl ReadinessResponse {
    pub fn from_database(ok: bool) -> Self {
        let state = if ok { "ok" } else { "unavailable" };
        Self {
            status: if ok { "ready" } else { "not_ready" }.to_string(),
            database: state.to_string(),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
