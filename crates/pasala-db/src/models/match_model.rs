//! Match database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for matches table
#[derive(Debug, Clone, FromRow)]
pub struct MatchModel {
    pub id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub club_id: Option<Uuid>,
    pub venue: Option<String>,
    pub max_players: i32,
    pub notes: Option<String>,
    pub status: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
