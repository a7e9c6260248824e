//! Roster handlers

use axum::{extract::State, Json};
use pasala_core::{MatchId, PlayerId};
use pasala_service::dto::{AddRosterPlayerRequest, RosterResponse};
use pasala_service::services::RosterService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Both sides of a match
///
/// GET /matches/{match_id}/roster
pub async fn get_roster(
    State(state): State<AppState>,
    IdPath(match_id): IdPath<MatchId>,
) -> ApiResult<Json<RosterResponse>> {
    let service = RosterService::new(state.service_context());
    Ok(Json(service.get_roster(match_id).await?))
}

/// Put a player on a team
///
/// POST /matches/{match_id}/roster
pub async fn add_player(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(match_id): IdPath<MatchId>,
    ValidatedJson(request): ValidatedJson<AddRosterPlayerRequest>,
) -> ApiResult<Created<Json<RosterResponse>>> {
    let service = RosterService::new(state.service_context());
    let response = service.add_player(match_id, auth.account_id, request).await?;
    Ok(Created(Json(response)))
}

/// Take a player off the roster; fails when the player is not on it
///
/// DELETE /matches/{match_id}/roster/{player_id}
pub async fn remove_player(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath((match_id, player_id)): IdPath<(MatchId, PlayerId)>,
) -> ApiResult<NoContent> {
    let service = RosterService::new(state.service_context());
    service.remove_player(match_id, player_id, auth.account_id).await?;
    Ok(NoContent)
}
