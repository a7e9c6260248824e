//! Player identity handlers
//!
//! Guests, the caller's own profile, public player pages and metrics.

use axum::{extract::State, Json};
use pasala_core::PlayerId;
use pasala_service::dto::{
    ApiResponse, CreateGuestRequest, CreateProfileRequest, MatchResponse, PlayerMetricsResponse,
    PlayerResponse, ProfileResponse,
};
use pasala_service::services::{MatchService, MetricsService, PlayerService};

use crate::extractors::{AuthUser, IdPath, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create an unclaimed guest identity
///
/// POST /players/guests
pub async fn create_guest(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateGuestRequest>,
) -> ApiResult<Created<Json<PlayerResponse>>> {
    let service = PlayerService::new(state.service_context());
    let response = service.create_guest(auth.account_id, request).await?;
    Ok(Created(Json(response)))
}

/// Create the caller's own identity
///
/// POST /players/@me
pub async fn create_own_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateProfileRequest>,
) -> ApiResult<Created<Json<ProfileResponse>>> {
    let service = PlayerService::new(state.service_context());
    let response = service.create_own_profile(auth.account_id, request).await?;
    Ok(Created(Json(response)))
}

/// GET /players/@me
pub async fn get_my_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let service = PlayerService::new(state.service_context());
    Ok(Json(service.get_my_profile(auth.account_id).await?))
}

/// Public player page
///
/// GET /players/{player_id}
pub async fn get_player(
    State(state): State<AppState>,
    IdPath(player_id): IdPath<PlayerId>,
) -> ApiResult<Json<PlayerResponse>> {
    let service = PlayerService::new(state.service_context());
    Ok(Json(service.get_player(player_id).await?))
}

/// Matches the player is rostered in, most recent first
///
/// GET /players/{player_id}/matches?limit=
pub async fn list_player_matches(
    State(state): State<AppState>,
    IdPath(player_id): IdPath<PlayerId>,
    pagination: Pagination,
) -> ApiResult<Json<ApiResponse<Vec<MatchResponse>>>> {
    let service = MatchService::new(state.service_context());
    let matches = service.list_player_matches(player_id, pagination.limit).await?;
    Ok(Json(ApiResponse::new(matches)))
}

/// Record, streaks and PASALA Index
///
/// GET /players/{player_id}/metrics
pub async fn player_metrics(
    State(state): State<AppState>,
    IdPath(player_id): IdPath<PlayerId>,
) -> ApiResult<Json<PlayerMetricsResponse>> {
    let service = MetricsService::new(state.service_context());
    Ok(Json(service.player_metrics(player_id).await?))
}
