//! Result model mappers

use pasala_core::{AccountId, MatchId, MatchResult, PlayedMatch};

use crate::models::{MatchResultModel, PlayedMatchModel};

use super::match_mapper::team_from_db;

impl From<MatchResultModel> for MatchResult {
    fn from(model: MatchResultModel) -> Self {
        MatchResult {
            match_id: MatchId::from_uuid(model.match_id),
            sets: model.sets.0,
            winner_team: team_from_db(&model.winner_team),
            recorded_by: AccountId::from_uuid(model.recorded_by),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<PlayedMatchModel> for PlayedMatch {
    fn from(model: PlayedMatchModel) -> Self {
        let match_id = MatchId::from_uuid(model.match_id);
        PlayedMatch {
            match_id,
            scheduled_at: model.scheduled_at,
            team: team_from_db(&model.team),
            result: MatchResult {
                match_id,
                sets: model.sets.0,
                winner_team: team_from_db(&model.winner_team),
                recorded_by: AccountId::from_uuid(model.recorded_by),
                created_at: model.created_at,
                updated_at: model.updated_at,
            },
        }
    }
}
