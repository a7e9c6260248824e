//! PostgreSQL implementation of ClubRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pasala_core::{AccountId, Club, ClubId, ClubRepository, RepoResult};

use crate::models::ClubModel;

use super::error::{contains_patterns, map_db_error};

/// PostgreSQL implementation of ClubRepository
#[derive(Clone)]
pub struct PgClubRepository {
    pool: PgPool,
}

impl PgClubRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClubRepository for PgClubRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ClubId) -> RepoResult<Option<Club>> {
        let result = sqlx::query_as::<_, ClubModel>(
            r#"
            SELECT * FROM clubs WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Club::from))
    }

    #[instrument(skip(self))]
    async fn find_by_normalized_name(&self, normalized_name: &str) -> RepoResult<Option<Club>> {
        let result = sqlx::query_as::<_, ClubModel>(
            r#"
            SELECT * FROM clubs
            WHERE normalized_name = $1 AND deleted_at IS NULL
            ORDER BY created_at
            LIMIT 1
            "#,
        )
        .bind(normalized_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Club::from))
    }

    #[instrument(skip(self, club), fields(club_id = %club.id))]
    async fn create(&self, club: &Club) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO clubs (
                id, name, normalized_name, country, region, city, geo_id, address,
                claim_status, created_by, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(club.id.into_inner())
        .bind(&club.name)
        .bind(&club.normalized_name)
        .bind(&club.location.country)
        .bind(&club.location.region)
        .bind(&club.location.city)
        .bind(&club.location.geo_id)
        .bind(&club.address)
        .bind(club.claim_status.as_str())
        .bind(club.created_by.map(AccountId::into_inner))
        .bind(club.created_at)
        .bind(club.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_name(
        &self,
        fragments: &[String],
        exclude: Option<ClubId>,
        limit: i64,
    ) -> RepoResult<Vec<Club>> {
        let patterns = contains_patterns(fragments);
        if patterns.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, ClubModel>(
            r#"
            SELECT * FROM clubs
            WHERE deleted_at IS NULL
              AND normalized_name LIKE ANY($1)
              AND ($2::uuid IS NULL OR id <> $2)
            ORDER BY created_at
            LIMIT $3
            "#,
        )
        .bind(patterns)
        .bind(exclude.map(ClubId::into_inner))
        .bind(limit.clamp(1, 100))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Club::from).collect())
    }
}
