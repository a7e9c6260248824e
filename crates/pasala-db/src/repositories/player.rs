//! PostgreSQL implementation of PlayerRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use pasala_core::{
    AccountId, ClaimOutcome, DomainError, MatchId, Player, PlayerId, PlayerRepository, RepoResult,
};

use crate::models::PlayerModel;

use super::error::{contains_patterns, map_db_error, map_unique_violation};

/// PostgreSQL implementation of PlayerRepository
#[derive(Clone)]
pub struct PgPlayerRepository {
    pool: PgPool,
}

impl PgPlayerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Work out why a guarded claim touched no row
    async fn diagnose_failed_claim(&self, id: PlayerId) -> RepoResult<ClaimOutcome> {
        let owner = sqlx::query_scalar::<_, Option<Uuid>>(
            r#"
            SELECT user_id FROM players WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(match owner {
            None => ClaimOutcome::NotFound,
            Some(Some(_)) => ClaimOutcome::AlreadyClaimed,
            Some(None) => ClaimOutcome::NotRostered,
        })
    }
}

#[async_trait]
impl PlayerRepository for PgPlayerRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: PlayerId) -> RepoResult<Option<Player>> {
        let result = sqlx::query_as::<_, PlayerModel>(
            r#"
            SELECT * FROM players WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Player::from))
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[PlayerId]) -> RepoResult<Vec<Player>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<Uuid> = ids.iter().map(|id| id.into_inner()).collect();

        let results = sqlx::query_as::<_, PlayerModel>(
            r#"
            SELECT * FROM players WHERE id = ANY($1) AND deleted_at IS NULL
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Player::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, account: AccountId) -> RepoResult<Option<Player>> {
        let result = sqlx::query_as::<_, PlayerModel>(
            r#"
            SELECT * FROM players WHERE user_id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(account.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Player::from))
    }

    #[instrument(skip(self, player), fields(player_id = %player.id, guest = player.is_guest))]
    async fn create(&self, player: &Player) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO players (
                id, user_id, first_name, last_name, display_name, normalized_name, phone,
                position, skill_category, country, region, city, geo_id, avatar_url,
                onboarding_completed, is_guest, created_by, claimed_at, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)
            "#,
        )
        .bind(player.id.into_inner())
        .bind(player.user_id.map(AccountId::into_inner))
        .bind(&player.first_name)
        .bind(&player.last_name)
        .bind(&player.display_name)
        .bind(&player.normalized_name)
        .bind(&player.phone)
        .bind(player.position.map(|p| p.as_str()))
        .bind(player.skill_category)
        .bind(&player.location.country)
        .bind(&player.location.region)
        .bind(&player.location.city)
        .bind(&player.location.geo_id)
        .bind(&player.avatar_url)
        .bind(player.onboarding_completed)
        .bind(player.is_guest)
        .bind(player.created_by.map(AccountId::into_inner))
        .bind(player.claimed_at)
        .bind(player.created_at)
        .bind(player.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::UserAlreadyHasProfile))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn claim(
        &self,
        id: PlayerId,
        account: AccountId,
        match_context: Option<MatchId>,
    ) -> RepoResult<ClaimOutcome> {
        // Ownership check and write in one statement; the unique index on user_id
        // rejects a second identity for the same account.
        let claimed = sqlx::query_as::<_, PlayerModel>(
            r#"
            UPDATE players
            SET user_id = $2, is_guest = FALSE, claimed_at = NOW(), updated_at = NOW()
            WHERE id = $1
              AND user_id IS NULL
              AND deleted_at IS NULL
              AND (
                  $3::uuid IS NULL
                  OR EXISTS (
                      SELECT 1 FROM match_players mp
                      WHERE mp.match_id = $3 AND mp.player_id = $1 AND mp.deleted_at IS NULL
                  )
              )
            RETURNING *
            "#,
        )
        .bind(id.into_inner())
        .bind(account.into_inner())
        .bind(match_context.map(MatchId::into_inner))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::UserAlreadyHasProfile))?;

        match claimed {
            Some(model) => Ok(ClaimOutcome::Claimed(Player::from(model))),
            None => self.diagnose_failed_claim(id).await,
        }
    }

    #[instrument(skip(self))]
    async fn find_unclaimed_by_name(
        &self,
        fragments: &[String],
        limit: i64,
    ) -> RepoResult<Vec<Player>> {
        let patterns = contains_patterns(fragments);
        if patterns.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, PlayerModel>(
            r#"
            SELECT * FROM players
            WHERE user_id IS NULL
              AND deleted_at IS NULL
              AND normalized_name LIKE ANY($1)
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(patterns)
        .bind(limit.clamp(1, 100))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Player::from).collect())
    }
}
