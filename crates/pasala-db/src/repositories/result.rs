//! PostgreSQL implementation of ResultRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use pasala_core::{
    DomainError, MatchId, MatchResult, MatchStatus, PlayedMatch, PlayerId, RepoResult,
    ResultRepository, RosterRequirement,
};

use crate::models::{MatchResultModel, PlayedMatchModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ResultRepository
#[derive(Clone)]
pub struct PgResultRepository {
    pool: PgPool,
}

impl PgResultRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResultRepository for PgResultRepository {
    #[instrument(skip(self))]
    async fn find_by_match(&self, match_id: MatchId) -> RepoResult<Option<MatchResult>> {
        let result = sqlx::query_as::<_, MatchResultModel>(
            r#"
            SELECT match_id, sets, winner_team, recorded_by, created_at, updated_at
            FROM match_results
            WHERE match_id = $1
            "#,
        )
        .bind(match_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(MatchResult::from))
    }

    #[instrument(skip(self, result), fields(match_id = %result.match_id, winner = %result.winner_team))]
    async fn upsert(&self, result: &MatchResult, requirement: RosterRequirement) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Roster writes take the same lock, so the counts below stay valid until commit
        let (status, max_players) = sqlx::query_as::<_, (String, i32)>(
            r#"
            SELECT status, max_players FROM matches
            WHERE id = $1 AND deleted_at IS NULL
            FOR UPDATE
            "#,
        )
        .bind(result.match_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::MatchNotFound(result.match_id))?;

        if MatchStatus::from(status.as_str()) == MatchStatus::Cancelled {
            return Err(DomainError::MatchCancelled);
        }

        let (team_a, team_b) = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT COUNT(*) FILTER (WHERE team = 'A'),
                   COUNT(*) FILTER (WHERE team = 'B')
            FROM match_players
            WHERE match_id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(result.match_id.into_inner())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        requirement.check(max_players, team_a as usize, team_b as usize)?;

        sqlx::query(
            r#"
            INSERT INTO match_results (match_id, sets, winner_team, recorded_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (match_id) DO UPDATE
            SET sets = EXCLUDED.sets,
                winner_team = EXCLUDED.winner_team,
                recorded_by = EXCLUDED.recorded_by,
                updated_at = NOW()
            "#,
        )
        .bind(result.match_id.into_inner())
        .bind(Json(&result.sets))
        .bind(result.winner_team.as_str())
        .bind(result.recorded_by.into_inner())
        .bind(result.created_at)
        .bind(result.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r#"
            UPDATE matches SET status = 'completed', updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(result.match_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn history_for_player(&self, player_id: PlayerId) -> RepoResult<Vec<PlayedMatch>> {
        let results = sqlx::query_as::<_, PlayedMatchModel>(
            r#"
            SELECT m.id AS match_id, m.scheduled_at, mp.team,
                   r.sets, r.winner_team, r.recorded_by, r.created_at, r.updated_at
            FROM match_players mp
            JOIN matches m ON m.id = mp.match_id
            JOIN match_results r ON r.match_id = m.id
            WHERE mp.player_id = $1
              AND mp.deleted_at IS NULL
              AND m.deleted_at IS NULL
              AND m.status = 'completed'
            ORDER BY m.scheduled_at DESC, r.updated_at DESC
            "#,
        )
        .bind(player_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(PlayedMatch::from).collect())
    }
}
