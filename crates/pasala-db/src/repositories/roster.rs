//! PostgreSQL implementation of RosterRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pasala_core::{
    DomainError, Match, MatchId, MatchStatus, PlayerId, RepoResult, RosterEntry, RosterRepository,
};

use crate::models::{MatchModel, RosterEntryModel};

use super::error::{map_constraint_violation, map_db_error};

/// PostgreSQL implementation of RosterRepository
#[derive(Clone)]
pub struct PgRosterRepository {
    pool: PgPool,
}

impl PgRosterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RosterRepository for PgRosterRepository {
    #[instrument(skip(self))]
    async fn list(&self, match_id: MatchId) -> RepoResult<Vec<RosterEntry>> {
        let results = sqlx::query_as::<_, RosterEntryModel>(
            r#"
            SELECT match_id, player_id, team, joined_at
            FROM match_players
            WHERE match_id = $1 AND deleted_at IS NULL
            ORDER BY joined_at, id
            "#,
        )
        .bind(match_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(RosterEntry::from).collect())
    }

    #[instrument(skip(self))]
    async fn is_rostered(&self, match_id: MatchId, player_id: PlayerId) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM match_players
                WHERE match_id = $1 AND player_id = $2 AND deleted_at IS NULL
            )
            "#,
        )
        .bind(match_id.into_inner())
        .bind(player_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, entry), fields(match_id = %entry.match_id, player_id = %entry.player_id, team = %entry.team))]
    async fn add(&self, entry: &RosterEntry) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the match row so concurrent adds are serialized per match
        let game: Match = sqlx::query_as::<_, MatchModel>(
            r#"
            SELECT id, scheduled_at, club_id, venue, max_players, notes, status,
                   created_by, created_at, updated_at, deleted_at
            FROM matches
            WHERE id = $1 AND deleted_at IS NULL
            FOR UPDATE
            "#,
        )
        .bind(entry.match_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .map(Match::from)
        .ok_or(DomainError::MatchNotFound(entry.match_id))?;

        let roster: Vec<RosterEntry> = sqlx::query_as::<_, RosterEntryModel>(
            r#"
            SELECT match_id, player_id, team, joined_at
            FROM match_players
            WHERE match_id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(entry.match_id.into_inner())
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?
        .into_iter()
        .map(RosterEntry::from)
        .collect();

        game.check_roster_slot(&roster, entry.player_id, entry.team)?;

        sqlx::query(
            r#"
            INSERT INTO match_players (match_id, player_id, team, joined_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(entry.match_id.into_inner())
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

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, match_id: MatchId, player_id: PlayerId) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Serialized with adds and result writes on the match row
        let status = sqlx::query_scalar::<_, String>(
            r#"
            SELECT status FROM matches
            WHERE id = $1 AND deleted_at IS NULL
            FOR UPDATE
            "#,
        )
        .bind(match_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::MatchNotFound(match_id))?;

        if MatchStatus::from(status.as_str()) == MatchStatus::Cancelled {
            return Err(DomainError::MatchCancelled);
        }

        let result = sqlx::query(
            r#"
            UPDATE match_players SET deleted_at = NOW()
            WHERE match_id = $1 AND player_id = $2 AND deleted_at IS NULL
            "#,
        )
        .bind(match_id.into_inner())
        .bind(player_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(result.rows_affected() > 0)
    }
}
