//! Match result database models

use chrono::{DateTime, Utc};
use pasala_core::SetScore;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for match_results table
#[derive(Debug, Clone, FromRow)]
pub struct MatchResultModel {
    pub match_id: Uuid,
    pub sets: Json<Vec<SetScore>>,
    pub winner_team: String,
    pub recorded_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A result joined with the team a given player was on
#[derive(Debug, Clone, FromRow)]
pub struct PlayedMatchModel {
    pub match_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub team: String,
    pub sets: Json<Vec<SetScore>>,
    pub winner_team: String,
    pub recorded_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
