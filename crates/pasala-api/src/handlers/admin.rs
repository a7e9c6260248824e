//! Moderation handlers
//!
//! Every operation here checks the caller against the configured admin accounts
//! in the service layer.

use axum::{extract::State, Json};
use pasala_core::{ClaimRequestId, MatchId, PlayerId};
use pasala_service::dto::{
    ApiResponse, ClubCandidateResponse, ClubCandidatesQuery, ClubClaimRequestResponse,
    ResolveClubClaimRequest,
};
use pasala_service::services::{ClubService, RosterService};

use crate::extractors::{AuthUser, IdPath, Pagination, ValidatedJson, ValidatedQuery};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Pending club claim requests, oldest first
///
/// GET /admin/club-claims?limit=
pub async fn list_pending_club_claims(
    State(state): State<AppState>,
    auth: AuthUser,
    pagination: Pagination,
) -> ApiResult<Json<ApiResponse<Vec<ClubClaimRequestResponse>>>> {
    let service = ClubService::new(state.service_context());
    let pending = service
        .list_pending_claims(auth.account_id, pagination.limit)
        .await?;
    Ok(Json(ApiResponse::new(pending)))
}

/// Approve or reject a club claim request
///
/// POST /admin/club-claims/{request_id}/resolve
pub async fn resolve_club_claim(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(request_id): IdPath<ClaimRequestId>,
    ValidatedJson(request): ValidatedJson<ResolveClubClaimRequest>,
) -> ApiResult<Json<ClubClaimRequestResponse>> {
    let service = ClubService::new(state.service_context());
    let response = service
        .resolve_claim(request_id, auth.account_id, request)
        .await?;
    Ok(Json(response))
}

/// Clubs that may duplicate a claimed name
///
/// GET /admin/clubs/candidates?name=&city=&region=&exclude_club_id=
pub async fn club_candidates(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedQuery(query): ValidatedQuery<ClubCandidatesQuery>,
) -> ApiResult<Json<ApiResponse<Vec<ClubCandidateResponse>>>> {
    let service = ClubService::new(state.service_context());
    let candidates = service.find_claim_candidates(auth.account_id, query).await?;
    Ok(Json(ApiResponse::new(candidates)))
}

/// Remove a roster entry; succeeds when the player is already off the roster
///
/// DELETE /admin/matches/{match_id}/roster/{player_id}
pub async fn remove_roster_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath((match_id, player_id)): IdPath<(MatchId, PlayerId)>,
) -> ApiResult<NoContent> {
    let service = RosterService::new(state.service_context());
    service
        .admin_remove_player(match_id, player_id, auth.account_id)
        .await?;
    Ok(NoContent)
}
