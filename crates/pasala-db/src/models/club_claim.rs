//! Club claim request database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for club_claim_requests table
#[derive(Debug, Clone, FromRow)]
pub struct ClubClaimRequestModel {
    pub id: Uuid,
    pub club_id: Uuid,
    pub requester_id: Uuid,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub resolved_by: Option<Uuid>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub resolution_note: Option<String>,
    pub created_at: DateTime<Utc>,
}
