//! Player database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for players table
#[derive(Debug, Clone, FromRow)]
pub struct PlayerModel {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: String,
    pub normalized_name: String,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub skill_category: Option<i16>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub geo_id: Option<String>,
    pub avatar_url: Option<String>,
    pub onboarding_completed: bool,
    pub is_guest: bool,
    pub created_by: Option<Uuid>,
    pub claimed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
