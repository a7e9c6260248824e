//! Club database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for clubs table
#[derive(Debug, Clone, FromRow)]
pub struct ClubModel {
    pub id: Uuid,
    pub name: String,
    pub normalized_name: String,
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub geo_id: Option<String>,
    pub address: Option<String>,
    pub claim_status: String,
    pub created_by: Option<Uuid>,
    pub claimed_by: Option<Uuid>,
    pub claimed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
