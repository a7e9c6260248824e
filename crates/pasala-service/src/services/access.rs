//! Access service
//!
//! Decides who may mutate a match and who may use the moderation surface.

use pasala_core::{AccountId, DomainError, Match, MatchId};
use tracing::{debug, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Access control for match mutations and admin operations
pub struct AccessService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccessService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load a non-deleted match or fail with `MatchNotFound`
    pub async fn load_match(&self, match_id: MatchId) -> ServiceResult<Match> {
        Ok(self
            .ctx
            .match_repo()
            .find_by_id(match_id)
            .await?
            .ok_or(DomainError::MatchNotFound(match_id))?)
    }

    /// Whether the account may change roster, result or lifecycle of the match.
    ///
    /// The creator and admins always may; otherwise the account's own identity
    /// must hold an active roster entry.
    #[instrument(skip(self, game), fields(match_id = %game.id))]
    pub async fn can_mutate_match(&self, game: &Match, account: AccountId) -> ServiceResult<bool> {
        if game.created_by == account || self.ctx.is_admin(account) {
            return Ok(true);
        }
        let Some(profile) = self.ctx.player_repo().find_by_user(account).await? else {
            debug!("Caller has no player identity");
            return Ok(false);
        };
        Ok(self.ctx.roster_repo().is_rostered(game.id, profile.id).await?)
    }

    /// Fail with `NotMatchParticipant` unless the account may mutate the match
    pub async fn require_match_mutation(&self, game: &Match, account: AccountId) -> ServiceResult<()> {
        if self.can_mutate_match(game, account).await? {
            Ok(())
        } else {
            warn!(match_id = %game.id, account_id = %account, "Rejected match mutation by non-participant");
            Err(DomainError::NotMatchParticipant.into())
        }
    }

    /// Fail with `NotMatchParticipant` unless the account created the match or is an admin
    pub fn require_creator(&self, game: &Match, account: AccountId) -> ServiceResult<()> {
        if game.created_by == account || self.ctx.is_admin(account) {
            Ok(())
        } else {
            warn!(match_id = %game.id, account_id = %account, "Rejected creator-only action");
            Err(DomainError::NotMatchParticipant.into())
        }
    }

    /// Fail with `AdminOnly` unless the account is a configured admin
    pub fn require_admin(&self, account: AccountId) -> ServiceResult<()> {
        if self.ctx.is_admin(account) {
            Ok(())
        } else {
            warn!(account_id = %account, "Rejected admin action");
            Err(DomainError::AdminOnly.into())
        }
    }
}
