//! Roster database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for match_players table (active rows only)
#[derive(Debug, Clone, FromRow)]
pub struct RosterEntryModel {
    pub match_id: Uuid,
    pub player_id: Uuid,
    pub team: String,
    pub joined_at: DateTime<Utc>,
}
