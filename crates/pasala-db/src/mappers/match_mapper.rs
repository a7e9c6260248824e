//! Match and roster model mappers

use pasala_core::{AccountId, ClubId, Match, MatchId, MatchStatus, PlayerId, RosterEntry, Team};

use crate::models::{MatchModel, RosterEntryModel};

/// Read a `team` column
pub fn team_from_db(value: &str) -> Team {
    if value == "B" {
        Team::B
    } else {
        Team::A
    }
}

impl From<MatchModel> for Match {
    fn from(model: MatchModel) -> Self {
        Match {
            id: MatchId::from_uuid(model.id),
            scheduled_at: model.scheduled_at,
            club_id: model.club_id.map(ClubId::from_uuid),
            venue: model.venue,
            max_players: model.max_players,
            notes: model.notes,
            status: MatchStatus::from(model.status.as_str()),
            created_by: AccountId::from_uuid(model.created_by),
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

impl From<RosterEntryModel> for RosterEntry {
    fn from(model: RosterEntryModel) -> Self {
        RosterEntry {
            match_id: MatchId::from_uuid(model.match_id),
            player_id: PlayerId::from_uuid(model.player_id),
            team: team_from_db(&model.team),
            joined_at: model.joined_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_from_db() {
        assert_eq!(team_from_db("A"), Team::A);
        assert_eq!(team_from_db("B"), Team::B);
    }
}
