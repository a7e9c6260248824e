//! PostgreSQL implementation of MatchRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use pasala_core::{
    ClubId, DomainError, Match, MatchId, MatchRepository, MatchResult, MatchStatus, PlayerId,
    RepoResult, RosterEntry,
};

use crate::models::MatchModel;

use super::error::{map_constraint_violation, map_db_error};

/// PostgreSQL implementation of MatchRepository
#[derive(Clone)]
pub struct PgMatchRepository {
    pool: PgPool,
}

impl PgMatchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MatchRepository for PgMatchRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: MatchId) -> RepoResult<Option<Match>> {
        let result = sqlx::query_as::<_, MatchModel>(
            r#"
            SELECT id, scheduled_at, club_id, venue, max_players, notes, status,
                   created_by, created_at, updated_at, deleted_at
            FROM matches
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Match::from))
    }

    #[instrument(skip(self, game), fields(match_id = %game.id))]
    async fn create(&self, game: &Match) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO matches (id, scheduled_at, club_id, venue, max_players, notes, status,
                                 created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(game.id.into_inner())
        .bind(game.scheduled_at)
        .bind(game.club_id.map(ClubId::into_inner))
        .bind(&game.venue)
        .bind(game.max_players)
        .bind(&game.notes)
        .bind(game.status.as_str())
        .bind(game.created_by.into_inner())
        .bind(game.created_at)
        .bind(game.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, game, roster, result), fields(match_id = %game.id, players = roster.len()))]
    async fn create_recorded(
        &self,
        game: &Match,
        roster: &[RosterEntry],
        result: &MatchResult,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO matches (id, scheduled_at, club_id, venue, max_players, notes, status,
                                 created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(game.id.into_inner())
        .bind(game.scheduled_at)
        .bind(game.club_id.map(ClubId::into_inner))
        .bind(&game.venue)
        .bind(game.max_players)
        .bind(&game.notes)
        .bind(MatchStatus::Completed.as_str())
        .bind(game.created_by.into_inner())
        .bind(game.created_at)
        .bind(game.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        for entry in roster {
            sqlx::query(
                r#"
                INSERT INTO match_players (match_id, player_id, team, joined_at)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(game.id.into_inner())
            .bind(entry.player_id.into_inner())
            .bind(entry.team.as_str())
            .bind(entry.joined_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                map_constraint_violation(
                    e,
                    || DomainError::DuplicatePlayer,
                    || DomainError::PlayerNotFound(entry.player_id),
                )
            })?;
        }

        sqlx::query(
            r#"
            INSERT INTO match_results (match_id, sets, winner_team, recorded_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(game.id.into_inner())
        .bind(Json(&result.sets))
        .bind(result.winner_team.as_str())
        .bind(result.recorded_by.into_inner())
        .bind(result.created_at)
        .bind(result.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn cancel(&self, id: MatchId) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE matches
            SET status = 'cancelled', updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MatchNotFound(id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: MatchId) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE matches SET deleted_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MatchNotFound(id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_player(&self, player_id: PlayerId, limit: i64) -> RepoResult<Vec<Match>> {
        let results = sqlx::query_as::<_, MatchModel>(
            r#"
            SELECT m.id, m.scheduled_at, m.club_id, m.venue, m.max_players, m.notes, m.status,
                   m.created_by, m.created_at, m.updated_at, m.deleted_at
            FROM matches m
            JOIN match_players mp ON mp.match_id = m.id AND mp.deleted_at IS NULL
            WHERE mp.player_id = $1 AND m.deleted_at IS NULL
            ORDER BY m.scheduled_at DESC
            LIMIT $2
            "#,
        )
        .bind(player_id.into_inner())
        .bind(limit.clamp(1, 200))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Match::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_club(&self, club_id: ClubId, limit: i64) -> RepoResult<Vec<Match>> {
        let results = sqlx::query_as::<_, MatchModel>(
            r#"
            SELECT id, scheduled_at, club_id, venue, max_players, notes, status,
                   created_by, created_at, updated_at, deleted_at
            FROM matches
            WHERE club_id = $1 AND deleted_at IS NULL
            ORDER BY scheduled_at ASC
            LIMIT $2
            "#,
        )
        .bind(club_id.into_inner())
        .bind(limit.clamp(1, 200))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Match::from).collect())
    }
}
