//! Request bodies and response shapes used by the API tests

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique suffix for names
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CreateMatchBody {
    pub scheduled_at: String,
    pub max_players: i32,
    pub venue: Option<String>,
}

impl CreateMatchBody {
    pub fn doubles() -> Self {
        Self {
            scheduled_at: "2030-05-01T19:00:00Z".to_string(),
            max_players: 4,
            venue: None,
        }
    }

    pub fn singles() -> Self {
        Self {
            max_players: 2,
            ..Self::doubles()
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GuestBody {
    pub first_name: String,
    pub last_name: String,
}

impl GuestBody {
    pub fn unique() -> Self {
        Self {
            first_name: "Guest".to_string(),
            last_name: format!("Number{}", unique_suffix()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileBody {
    pub display_name: String,
}

impl ProfileBody {
    pub fn unique() -> Self {
        Self {
            display_name: format!("Player {}", unique_suffix()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RosterBody {
    pub player_id: String,
    pub team: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SetBody {
    pub a: i32,
    pub b: i32,
}

#[derive(Debug, Serialize)]
pub struct ResultBody {
    pub sets: Vec<SetBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner_team: Option<&'static str>,
}

impl ResultBody {
    pub fn sets(raw: &[(i32, i32)]) -> Self {
        Self {
            sets: raw.iter().map(|&(a, b)| SetBody { a, b }).collect(),
            winner_team: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClaimBody {
    pub target_player_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateClubBody {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ClubClaimBody {
    pub contact_name: String,
    pub contact_email: String,
}

impl ClubClaimBody {
    pub fn sample() -> Self {
        Self {
            contact_name: "Club Owner".to_string(),
            contact_email: "owner@club.test".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResolveBody {
    pub decision: &'static str,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct MatchBody {
    pub id: String,
    pub status: String,
    pub club_id: Option<String>,
    pub team_capacity: usize,
}

#[derive(Debug, Deserialize)]
pub struct PlayerBody {
    pub id: String,
    pub display_name: String,
    pub is_guest: bool,
    pub claimed: bool,
}

#[derive(Debug, Deserialize)]
pub struct OwnProfileBody {
    pub id: String,
    pub user_id: Option<String>,
    pub is_guest: bool,
}

#[derive(Debug, Deserialize)]
pub struct RosterEntryBody {
    pub player_id: String,
    pub team: String,
}

#[derive(Debug, Deserialize)]
pub struct RosterResponseBody {
    pub team_a: Vec<RosterEntryBody>,
    pub team_b: Vec<RosterEntryBody>,
}

#[derive(Debug, Deserialize)]
pub struct ResultResponseBody {
    pub winner_team: String,
    pub sets_won_a: usize,
    pub sets_won_b: usize,
}

#[derive(Debug, Deserialize)]
pub struct MetricsBody {
    pub matches_played: u32,
    pub wins: u32,
    pub pasala_index: u8,
}

#[derive(Debug, Deserialize)]
pub struct ClubBody {
    pub id: String,
    pub claim_status: String,
}

#[derive(Debug, Deserialize)]
pub struct ClubClaimRequestBody {
    pub id: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct ShareBody {
    pub url: String,
    pub whatsapp_url: String,
}
