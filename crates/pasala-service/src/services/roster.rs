//! Roster service
//!
//! Assigns players to the two sides of a match. Capacity and duplicate checks
//! are enforced atomically by the repository.

use pasala_core::{AccountId, DomainError, MatchId, PlayerId, RosterEntry};
use tracing::{info, instrument};

use crate::dto::{AddRosterPlayerRequest, RosterResponse, RosterWithPlayers};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::{parse_id, ServiceError, ServiceResult};

/// Roster service
pub struct RosterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RosterService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Both sides with player names
    #[instrument(skip(self))]
    pub async fn get_roster(&self, match_id: MatchId) -> ServiceResult<RosterResponse> {
        let game = AccessService::new(self.ctx).load_match(match_id).await?;
        let entries = self.ctx.roster_repo().list(match_id).await?;
        let ids: Vec<PlayerId> = entries.iter().map(|e| e.player_id).collect();
        let players = self.ctx.player_repo().find_by_ids(&ids).await?;

        Ok(RosterResponse::from(RosterWithPlayers {
            game: &game,
            entries: &entries,
            players: &players,
        }))
    }

    /// Put a player on one side.
    ///
    /// Allowed for the creator, current participants, admins, and for a caller
    /// adding their own identity.
    #[instrument(skip(self, request), fields(team = %request.team))]
    pub async fn add_player(
        &self,
        match_id: MatchId,
        account: AccountId,
        request: AddRosterPlayerRequest,
    ) -> ServiceResult<RosterResponse> {
        ensure_same_match(match_id, request.match_id.as_deref())?;
        let player_id: PlayerId = parse_id("player_id", &request.player_id)?;

        let access = AccessService::new(self.ctx);
        let game = access.load_match(match_id).await?;
        game.ensure_open()?;

        let player = self
            .ctx
            .player_repo()
            .find_by_id(player_id)
            .await?
            .ok_or(DomainError::PlayerNotFound(player_id))?;
        if !player.is_owned_by(account) {
            access.require_match_mutation(&game, account).await?;
        }

        let entry = RosterEntry::new(match_id, player_id, request.team);
        self.ctx.roster_repo().add(&entry).await?;

        info!(match_id = %match_id, player_id = %player_id, team = %request.team, actor_id = %account, "Player added to roster");

        self.get_roster(match_id).await
    }

    /// Participant removal: an absent entry is `RosterEntryNotFound`.
    ///
    /// Players may always remove their own identity. A cancelled match's roster is
    /// frozen.
    #[instrument(skip(self))]
    pub async fn remove_player(
        &self,
        match_id: MatchId,
        player_id: PlayerId,
        account: AccountId,
    ) -> ServiceResult<()> {
        let access = AccessService::new(self.ctx);
        let game = access.load_match(match_id).await?;
        game.ensure_open()?;

        let own_identity = self
            .ctx
            .player_repo()
            .find_by_user(account)
            .await?
            .is_some_and(|p| p.id == player_id);
        if !own_identity {
            access.require_match_mutation(&game, account).await?;
        }

        if !self.ctx.roster_repo().remove(match_id, player_id).await? {
            return Err(DomainError::RosterEntryNotFound.into());
        }

        info!(match_id = %match_id, player_id = %player_id, actor_id = %account, "Player removed from roster");
        Ok(())
    }

    /// Admin removal: an absent entry is a no-op
    #[instrument(skip(self))]
    pub async fn admin_remove_player(
        &self,
        match_id: MatchId,
        player_id: PlayerId,
        admin: AccountId,
    ) -> ServiceResult<()> {
        let access = AccessService::new(self.ctx);
        access.require_admin(admin)?;
        access.load_match(match_id).await?.ensure_open()?;

        if self.ctx.roster_repo().remove(match_id, player_id).await? {
            info!(match_id = %match_id, player_id = %player_id, actor_id = %admin, "Player removed from roster by admin");
        }
        Ok(())
    }
}

/// A body naming a match must name the one in the path
pub(crate) fn ensure_same_match(path: MatchId, body: Option<&str>) -> ServiceResult<()> {
    let Some(raw) = body else {
        return Ok(());
    };
    let body: MatchId = parse_id("match_id", raw)?;
    if body == path {
        Ok(())
    } else {
        Err(ServiceError::validation("match_id does not match the path"))
    }
}
