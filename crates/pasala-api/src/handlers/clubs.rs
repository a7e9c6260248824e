//! Club handlers

use axum::{extract::State, Json};
use pasala_core::ClubId;
use pasala_service::dto::{
    ClubCalendarResponse, ClubClaimRequestResponse, ClubResponse, CreateClubRequest,
    RequestClubClaimRequest,
};
use pasala_service::services::ClubService;

use crate::extractors::{AuthUser, IdPath, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// POST /clubs
pub async fn create_club(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateClubRequest>,
) -> ApiResult<Created<Json<ClubResponse>>> {
    let service = ClubService::new(state.service_context());
    let response = service.create_club(auth.account_id, request).await?;
    Ok(Created(Json(response)))
}

/// GET /clubs/{club_id}
pub async fn get_club(
    State(state): State<AppState>,
    IdPath(club_id): IdPath<ClubId>,
) -> ApiResult<Json<ClubResponse>> {
    let service = ClubService::new(state.service_context());
    Ok(Json(service.get_club(club_id).await?))
}

/// Club with its matches, soonest first
///
/// GET /clubs/{club_id}/matches?limit=
pub async fn club_calendar(
    State(state): State<AppState>,
    IdPath(club_id): IdPath<ClubId>,
    pagination: Pagination,
) -> ApiResult<Json<ClubCalendarResponse>> {
    let service = ClubService::new(state.service_context());
    Ok(Json(service.club_calendar(club_id, pagination.limit).await?))
}

/// Ask to take over an unclaimed club
///
/// POST /clubs/{club_id}/claim-requests
pub async fn request_club_claim(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(club_id): IdPath<ClubId>,
    ValidatedJson(request): ValidatedJson<RequestClubClaimRequest>,
) -> ApiResult<Created<Json<ClubClaimRequestResponse>>> {
    let service = ClubService::new(state.service_context());
    let response = service.request_claim(club_id, auth.account_id, request).await?;
    Ok(Created(Json(response)))
}
