//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use pasala_core::{Club, ClubClaimRequest, Match, MatchResult, Player, RosterEntry, Team};

use super::responses::{
    ClubClaimRequestResponse, ClubResponse, MatchResponse, PlayerResponse, ProfileResponse,
    ResultResponse, RosterEntryResponse, RosterResponse,
};

// ============================================================================
// Match Mappers
// ============================================================================

impl From<&Match> for MatchResponse {
    fn from(game: &Match) -> Self {
        Self {
            id: game.id,
            scheduled_at: game.scheduled_at,
            club_id: game.club_id,
            venue: game.venue.clone(),
            max_players: game.max_players,
            team_capacity: game.team_capacity(),
            notes: game.notes.clone(),
            status: game.status,
            created_by: game.created_by,
            created_at: game.created_at,
        }
    }
}

impl From<Match> for MatchResponse {
    fn from(game: Match) -> Self {
        Self::from(&game)
    }
}

impl From<&MatchResult> for ResultResponse {
    fn from(result: &MatchResult) -> Self {
        Self {
            match_id: result.match_id,
            sets: result.sets.clone(),
            winner_team: result.winner_team,
            sets_won_a: result.sets_won(Team::A),
            sets_won_b: result.sets_won(Team::B),
            recorded_by: result.recorded_by,
            updated_at: result.updated_at,
        }
    }
}

impl From<MatchResult> for ResultResponse {
    fn from(result: MatchResult) -> Self {
        Self::from(&result)
    }
}

/// Roster entries joined with their players
pub struct RosterWithPlayers<'a> {
    pub game: &'a Match,
    pub entries: &'a [RosterEntry],
    pub players: &'a [Player],
}

impl From<RosterWithPlayers<'_>> for RosterResponse {
    fn from(data: RosterWithPlayers<'_>) -> Self {
        let mut team_a = Vec::new();
        let mut team_b = Vec::new();
        for entry in data.entries {
            let player = data.players.iter().find(|p| p.id == entry.player_id);
            let slot = RosterEntryResponse {
                player_id: entry.player_id,
                display_name: player.map_or_else(String::new, |p| p.display_name.clone()),
                is_guest: player.is_some_and(|p| p.is_guest),
                team: entry.team,
                joined_at: entry.joined_at,
            };
            match entry.team {
                Team::A => team_a.push(slot),
                Team::B => team_b.push(slot),
            }
        }
        Self {
            match_id: data.game.id,
            team_capacity: data.game.team_capacity(),
            team_a,
            team_b,
        }
    }
}

// ============================================================================
// Player Mappers
// ============================================================================

impl From<&Player> for PlayerResponse {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            display_name: player.display_name.clone(),
            first_name: player.first_name.clone(),
            last_name: player.last_name.clone(),
            position: player.position,
            skill_category: player.skill_category,
            location: player.location.clone(),
            avatar_url: player.avatar_url.clone(),
            is_guest: player.is_guest,
            claimed: player.is_claimed(),
            created_at: player.created_at,
        }
    }
}

impl From<Player> for PlayerResponse {
    fn from(player: Player) -> Self {
        Self::from(&player)
    }
}

impl From<&Player> for ProfileResponse {
    fn from(player: &Player) -> Self {
        Self {
            player: PlayerResponse::from(player),
            user_id: player.user_id,
            phone: player.phone.clone(),
            onboarding_completed: player.onboarding_completed,
            claimed_at: player.claimed_at,
        }
    }
}

impl From<Player> for ProfileResponse {
    fn from(player: Player) -> Self {
        Self::from(&player)
    }
}

// ============================================================================
// Club Mappers
// ============================================================================

impl From<&Club> for ClubResponse {
    fn from(club: &Club) -> Self {
        Self {
            id: club.id,
            name: club.name.clone(),
            location: club.location.clone(),
            address: club.address.clone(),
            claim_status: club.claim_status,
            claimed_by: club.claimed_by,
            created_at: club.created_at,
        }
    }
}

impl From<Club> for ClubResponse {
    fn from(club: Club) -> Self {
        Self::from(&club)
    }
}

impl From<ClubClaimRequest> for ClubClaimRequestResponse {
    fn from(request: ClubClaimRequest) -> Self {
        Self {
            id: request.id,
            club_id: request.club_id,
            requester: request.requester,
            contact_name: request.contact_name,
            contact_email: request.contact_email,
            contact_phone: request.contact_phone,
            message: request.message,
            status: request.status,
            resolved_by: request.resolved_by,
            resolved_at: request.resolved_at,
            resolution_note: request.resolution_note,
            created_at: request.created_at,
        }
    }
}
