//! Match handlers
//!
//! Scheduling, quick recording, cancellation and share links.

use axum::{extract::State, Json};
use pasala_core::MatchId;
use pasala_service::dto::{
    CreateMatchRequest, MatchDetailResponse, MatchResponse, QuickMatchRequest, QuickMatchResponse,
    ShareLinkResponse,
};
use pasala_service::services::MatchService;

use crate::extractors::{AuthUser, IdPath, ScoresJson, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Schedule a match with an empty roster
///
/// POST /matches
pub async fn create_match(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateMatchRequest>,
) -> ApiResult<Created<Json<MatchResponse>>> {
    let service = MatchService::new(state.service_context());
    let response = service.create_match(auth.account_id, request).await?;
    Ok(Created(Json(response)))
}

/// Record a played match with roster and result in one call
///
/// POST /matches/quick
pub async fn record_quick_match(
    State(state): State<AppState>,
    auth: AuthUser,
    ScoresJson(request): ScoresJson<QuickMatchRequest>,
) -> ApiResult<Created<Json<QuickMatchResponse>>> {
    let service = MatchService::new(state.service_context());
    let response = service.record_quick_match(auth.account_id, request).await?;
    Ok(Created(Json(response)))
}

/// Match with roster and result (anonymous viewers allowed)
///
/// GET /matches/{match_id}
pub async fn get_match(
    State(state): State<AppState>,
    IdPath(match_id): IdPath<MatchId>,
) -> ApiResult<Json<MatchDetailResponse>> {
    let service = MatchService::new(state.service_context());
    Ok(Json(service.get_match(match_id).await?))
}

/// Cancel a match (creator or admin)
///
/// POST /matches/{match_id}/cancel
pub async fn cancel_match(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(match_id): IdPath<MatchId>,
) -> ApiResult<Json<MatchResponse>> {
    let service = MatchService::new(state.service_context());
    Ok(Json(service.cancel_match(match_id, auth.account_id).await?))
}

/// Delete a match (creator or admin)
///
/// DELETE /matches/{match_id}
pub async fn delete_match(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(match_id): IdPath<MatchId>,
) -> ApiResult<NoContent> {
    let service = MatchService::new(state.service_context());
    service.delete_match(match_id, auth.account_id).await?;
    Ok(NoContent)
}

/// Public link and WhatsApp deep link for a match
///
/// GET /matches/{match_id}/share
pub async fn share_link(
    State(state): State<AppState>,
    IdPath(match_id): IdPath<MatchId>,
) -> ApiResult<Json<ShareLinkResponse>> {
    let service = MatchService::new(state.service_context());
    Ok(Json(service.share_link(match_id).await?))
}
