//! Match service
//!
//! Match lifecycle (create, cancel, soft delete), the public match page, the
//! quick record flow and share links.

use chrono::Utc;
use pasala_core::{
    AccountId, DomainError, Match, MatchId, MatchResult, MatchStatus, Player, PlayerId,
    RosterEntry, RosterRequirement, Team,
};
use tracing::{info, instrument, warn};

use crate::dto::{
    CreateMatchRequest, MatchDetailResponse, MatchResponse, PlayerResponse, QuickMatchRequest,
    QuickMatchResponse, QuickRosterSlot, ResultResponse, RosterResponse, RosterWithPlayers,
    ShareLinkResponse,
};

use super::access::AccessService;
use super::club::ClubService;
use super::context::ServiceContext;
use super::error::{parse_id, ServiceError, ServiceResult};

/// Default page size for match lists
pub const DEFAULT_MATCH_LIMIT: i64 = 50;

/// Match service
pub struct MatchService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MatchService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a scheduled match with an empty roster
    #[instrument(skip(self, request))]
    pub async fn create_match(
        &self,
        account: AccountId,
        request: CreateMatchRequest,
    ) -> ServiceResult<MatchResponse> {
        let mut game = Match::new(MatchId::new(), account, request.scheduled_at, request.max_players)?;
        let (club_id, venue) = ClubService::new(self.ctx)
            .resolve_venue(account, request.club_id.as_deref(), request.venue.as_deref())
            .await?;
        game.club_id = club_id;
        game.venue = venue;
        game.notes = request.notes;

        self.ctx.match_repo().create(&game).await?;

        info!(match_id = %game.id, created_by = %account, max_players = game.max_players, "Match created");

        Ok(MatchResponse::from(&game))
    }

    /// Public match page: header, roster with names and result
    #[instrument(skip(self))]
    pub async fn get_match(&self, match_id: MatchId) -> ServiceResult<MatchDetailResponse> {
        let game = AccessService::new(self.ctx).load_match(match_id).await?;
        self.detail(&game).await
    }

    /// Matches a player is rostered in, most recent first
    #[instrument(skip(self))]
    pub async fn list_player_matches(
        &self,
        player_id: PlayerId,
        limit: i64,
    ) -> ServiceResult<Vec<MatchResponse>> {
        self.ctx
            .player_repo()
            .find_by_id(player_id)
            .await?
            .ok_or(DomainError::PlayerNotFound(player_id))?;

        let matches = self.ctx.match_repo().find_by_player(player_id, limit).await?;
        Ok(matches.iter().map(MatchResponse::from).collect())
    }

    /// Move the match to the terminal cancelled state (creator or admin)
    #[instrument(skip(self))]
    pub async fn cancel_match(
        &self,
        match_id: MatchId,
        account: AccountId,
    ) -> ServiceResult<MatchResponse> {
        let access = AccessService::new(self.ctx);
        let mut game = access.load_match(match_id).await?;
        access.require_creator(&game, account)?;

        if !game.is_cancelled() {
            self.ctx.match_repo().cancel(match_id).await?;
            game.cancel();
            info!(match_id = %match_id, actor_id = %account, "Match cancelled");
        }

        Ok(MatchResponse::from(&game))
    }

    /// Soft delete a match (creator or admin)
    #[instrument(skip(self))]
    pub async fn delete_match(&self, match_id: MatchId, account: AccountId) -> ServiceResult<()> {
        let access = AccessService::new(self.ctx);
        let game = access.load_match(match_id).await?;
        access.require_creator(&game, account)?;

        self.ctx.match_repo().delete(match_id).await?;

        info!(match_id = %match_id, actor_id = %account, "Match deleted");
        Ok(())
    }

    /// Public URL of the match page and a WhatsApp deep link sharing it
    #[instrument(skip(self))]
    pub async fn share_link(&self, match_id: MatchId) -> ServiceResult<ShareLinkResponse> {
        let game = AccessService::new(self.ctx).load_match(match_id).await?;
        let detail = self.detail(&game).await?;

        let url = format!("{}/m/{}", self.ctx.public_base_url(), match_id);
        let text = share_text(&detail, &url);
        let whatsapp_url = format!("https://wa.me/?text={}", urlencoding::encode(&text));

        Ok(ShareLinkResponse {
            match_id,
            url,
            text,
            whatsapp_url,
        })
    }

    /// Create match, roster and result in one call.
    ///
    /// Slots may name existing players or guests to create on the fly. The roster
    /// may be partial: no roster requirement applies to this entry point.
    #[instrument(skip(self, request), fields(team_a = request.team_a.len(), team_b = request.team_b.len()))]
    pub async fn record_quick_match(
        &self,
        account: AccountId,
        request: QuickMatchRequest,
    ) -> ServiceResult<QuickMatchResponse> {
        let scheduled_at = request.scheduled_at.unwrap_or_else(Utc::now);
        let mut game = Match::new(MatchId::new(), account, scheduled_at, request.max_players)?;
        let (club_id, venue) = ClubService::new(self.ctx)
            .resolve_venue(account, request.club_id.as_deref(), request.venue.as_deref())
            .await?;
        game.club_id = club_id;
        game.venue = venue;
        game.notes = request.notes;

        let mut entries: Vec<RosterEntry> = Vec::new();
        let mut players: Vec<Player> = Vec::new();
        let mut guests: Vec<Player> = Vec::new();
        let slots = request
            .team_a
            .iter()
            .map(|slot| (Team::A, slot))
            .chain(request.team_b.iter().map(|slot| (Team::B, slot)));
        for (team, slot) in slots {
            let (player, is_new) = self.resolve_slot(account, slot).await?;
            game.check_roster_slot(&entries, player.id, team)?;
            entries.push(RosterEntry::new(game.id, player.id, team));
            if is_new {
                guests.push(player.clone());
            }
            players.push(player);
        }

        let (team_a, team_b) = RosterEntry::team_counts(&entries);
        RosterRequirement::None.check(game.max_players, team_a, team_b)?;

        let result = MatchResult::decide(game.id, request.sets, self.ctx.match_format(), account)?;
        log_claimed_winner(game.id, request.winner_team, result.winner_team);

        for guest in &guests {
            self.ctx.player_repo().create(guest).await?;
        }
        self.ctx.match_repo().create_recorded(&game, &entries, &result).await?;
        game.status = MatchStatus::Completed;

        info!(
            match_id = %game.id,
            created_by = %account,
            guests = guests.len(),
            winner = %result.winner_team,
            "Quick match recorded"
        );

        let roster = RosterResponse::from(RosterWithPlayers {
            game: &game,
            entries: &entries,
            players: &players,
        });
        Ok(QuickMatchResponse {
            detail: MatchDetailResponse {
                game: MatchResponse::from(&game),
                roster,
                result: Some(ResultResponse::from(&result)),
            },
            created_guests: guests.iter().map(PlayerResponse::from).collect(),
        })
    }

    /// Existing player for the slot, or a guest built (not yet stored) from its
    /// name. The flag is true for a new guest.
    async fn resolve_slot(
        &self,
        account: AccountId,
        slot: &QuickRosterSlot,
    ) -> ServiceResult<(Player, bool)> {
        match (slot.player_id.as_deref(), slot.guest_name.as_deref()) {
            (Some(raw), _) => {
                let player_id: PlayerId = parse_id("player_id", raw)?;
                let player = self
                    .ctx
                    .player_repo()
                    .find_by_id(player_id)
                    .await?
                    .ok_or(DomainError::PlayerNotFound(player_id))?;
                Ok((player, false))
            }
            (None, Some(name)) => {
                let guest =
                    Player::new_guest(PlayerId::new(), account, Some(name.to_string()), None, None)?;
                Ok((guest, true))
            }
            (None, None) => Err(ServiceError::validation(
                "each roster slot needs player_id or guest_name",
            )),
        }
    }

    /// Header, roster with player names and result of a loaded match
    pub(crate) async fn detail(&self, game: &Match) -> ServiceResult<MatchDetailResponse> {
        let entries = self.ctx.roster_repo().list(game.id).await?;
        let ids: Vec<PlayerId> = entries.iter().map(|e| e.player_id).collect();
        let players = self.ctx.player_repo().find_by_ids(&ids).await?;
        let result = self.ctx.result_repo().find_by_match(game.id).await?;

        Ok(MatchDetailResponse {
            game: MatchResponse::from(game),
            roster: RosterResponse::from(RosterWithPlayers {
                game,
                entries: &entries,
                players: &players,
            }),
            result: result.as_ref().map(ResultResponse::from),
        })
    }
}

/// A caller-supplied winner never overrides the derived one
pub(crate) fn log_claimed_winner(match_id: MatchId, claimed: Option<Team>, derived: Team) {
    if let Some(claimed) = claimed.filter(|team| *team != derived) {
        warn!(match_id = %match_id, claimed = %claimed, derived = %derived, "Submitted winner ignored");
    }
}

fn side_names(entries: &[crate::dto::RosterEntryResponse]) -> String {
    if entries.is_empty() {
        return "?".to_string();
    }
    entries
        .iter()
        .map(|e| e.display_name.as_str())
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Message shared alongside the public match URL
fn share_text(detail: &MatchDetailResponse, url: &str) -> String {
    let team_a = side_names(&detail.roster.team_a);
    let team_b = side_names(&detail.roster.team_b);
    match &detail.result {
        Some(result) => {
            let score = result
                .sets
                .iter()
                .map(|s| format!("{}-{}", s.a, s.b))
                .collect::<Vec<_>>()
                .join(" ");
            format!("{team_a} vs {team_b}: {score}. See the match and claim your profile on PASALA: {url}")
        }
        None => format!(
            "{team_a} vs {team_b} on {}. Follow the match on PASALA: {url}",
            detail.game.scheduled_at.format("%Y-%m-%d %H:%M UTC")
        ),
    }
}
