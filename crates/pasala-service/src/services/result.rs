//! Result service
//!
//! Validates set scores against the match format, derives the winner and stores
//! the result. Storing a result completes the match in the same transaction.

use pasala_core::{AccountId, MatchId, MatchResult, RosterEntry, RosterRequirement};
use tracing::{info, instrument};

use crate::dto::{ResultResponse, SubmitResultRequest};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::matches::log_claimed_winner;
use super::roster::ensure_same_match;

/// Result service
pub struct ResultService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ResultService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit or replace a result, applying the configured roster requirement
    pub async fn submit_result(
        &self,
        match_id: MatchId,
        account: AccountId,
        request: SubmitResultRequest,
    ) -> ServiceResult<ResultResponse> {
        let requirement = self.ctx.result_roster_requirement();
        self.submit_with_requirement(match_id, account, request, requirement)
            .await
    }

    /// Submit or replace a result under an explicit roster requirement
    #[instrument(skip(self, request), fields(sets = request.sets.len()))]
    pub async fn submit_with_requirement(
        &self,
        match_id: MatchId,
        account: AccountId,
        request: SubmitResultRequest,
        requirement: RosterRequirement,
    ) -> ServiceResult<ResultResponse> {
        ensure_same_match(match_id, request.match_id.as_deref())?;

        let access = AccessService::new(self.ctx);
        let game = access.load_match(match_id).await?;
        game.ensure_open()?;
        access.require_match_mutation(&game, account).await?;

        // Early rejection; the repository repeats the check under the match lock
        let roster = self.ctx.roster_repo().list(match_id).await?;
        let (team_a, team_b) = RosterEntry::team_counts(&roster);
        requirement.check(game.max_players, team_a, team_b)?;

        let result = MatchResult::decide(match_id, request.sets, self.ctx.match_format(), account)?;
        log_claimed_winner(match_id, request.winner_team, result.winner_team);

        self.ctx.result_repo().upsert(&result, requirement).await?;

        info!(
            match_id = %match_id,
            winner = %result.winner_team,
            recorded_by = %account,
            replaced = game.is_completed(),
            "Result stored"
        );
        Ok(ResultResponse::from(&result))
    }

    /// Stored result, `None` while the match is unplayed
    #[instrument(skip(self))]
    pub async fn get_result(&self, match_id: MatchId) -> ServiceResult<Option<ResultResponse>> {
        AccessService::new(self.ctx).load_match(match_id).await?;
        let result = self.ctx.result_repo().find_by_match(match_id).await?;
        Ok(result.as_ref().map(ResultResponse::from))
    }
}
