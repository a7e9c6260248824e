//! PostgreSQL implementation of ClubClaimRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pasala_core::{
    AccountId, ClaimRequestId, ClaimRequestStatus, Club, ClubClaimRepository, ClubClaimRequest,
    ClubClaimStatus, DomainError, RepoResult,
};

use crate::models::{ClubClaimRequestModel, ClubModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ClubClaimRepository
#[derive(Clone)]
pub struct PgClubClaimRepository {
    pool: PgPool,
}

impl PgClubClaimRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClubClaimRepository for PgClubClaimRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ClaimRequestId) -> RepoResult<Option<ClubClaimRequest>> {
        let result = sqlx::query_as::<_, ClubClaimRequestModel>(
            r#"
            SELECT * FROM club_claim_requests WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ClubClaimRequest::from))
    }

    #[instrument(skip(self, request), fields(request_id = %request.id, club_id = %request.club_id))]
    async fn create(&self, request: &ClubClaimRequest) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let club: Club = sqlx::query_as::<_, ClubModel>(
            r#"
            SELECT * FROM clubs WHERE id = $1 AND deleted_at IS NULL FOR UPDATE
            "#,
        )
        .bind(request.club_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .map(Club::from)
        .ok_or(DomainError::ClubNotFound(request.club_id))?;

        club.ensure_claimable()?;

        sqlx::query(
            r#"
            INSERT INTO club_claim_requests (
                id, club_id, requester_id, contact_name, contact_email, contact_phone,
                message, status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'pending', $8)
            "#,
        )
        .bind(request.id.into_inner())
        .bind(request.club_id.into_inner())
        .bind(request.requester.into_inner())
        .bind(&request.contact_name)
        .bind(&request.contact_email)
        .bind(&request.contact_phone)
        .bind(&request.message)
        .bind(request.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ClubClaimInReview))?;

        sqlx::query(
            r#"
            UPDATE clubs SET claim_status = 'pending', updated_at = NOW() WHERE id = $1
            "#,
        )
        .bind(request.club_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self, note))]
    async fn resolve(
        &self,
        id: ClaimRequestId,
        decision: ClaimRequestStatus,
        resolver: AccountId,
        note: Option<String>,
    ) -> RepoResult<ClubClaimRequest> {
        let club_status = match decision {
            ClaimRequestStatus::Approved => ClubClaimStatus::Claimed,
            ClaimRequestStatus::Rejected => ClubClaimStatus::Unclaimed,
            ClaimRequestStatus::Pending => {
                return Err(DomainError::ValidationError(
                    "decision must be approved or rejected".to_string(),
                ))
            }
        };

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let request: ClubClaimRequest = sqlx::query_as::<_, ClubClaimRequestModel>(
            r#"
            SELECT * FROM club_claim_requests WHERE id = $1 FOR UPDATE
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .map(ClubClaimRequest::from)
        .ok_or(DomainError::ClaimRequestNotFound(id))?;

        request.ensure_pending()?;

        let resolved = sqlx::query_as::<_, ClubClaimRequestModel>(
            r#"
            UPDATE club_claim_requests
            SET status = $2, resolved_by = $3, resolved_at = NOW(), resolution_note = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id.into_inner())
        .bind(decision.as_str())
        .bind(resolver.into_inner())
        .bind(&note)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let claimed_by =
            (club_status == ClubClaimStatus::Claimed).then_some(request.requester.into_inner());
        sqlx::query(
            r#"
            UPDATE clubs
            SET claim_status = $2,
                claimed_by = $3,
                claimed_at = CASE WHEN $3::uuid IS NULL THEN NULL ELSE NOW() END,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(request.club_id.into_inner())
        .bind(club_status.as_str())
        .bind(claimed_by)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(ClubClaimRequest::from(resolved))
    }

    #[instrument(skip(self))]
    async fn list_pending(&self, limit: i64) -> RepoResult<Vec<ClubClaimRequest>> {
        let results = sqlx::query_as::<_, ClubClaimRequestModel>(
            r#"
            SELECT * FROM club_claim_requests
            WHERE status = 'pending'
            ORDER BY created_at ASC
            LIMIT $1
            "#,
        )
        .bind(limit.clamp(1, 200))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ClubClaimRequest::from).collect())
    }
}
