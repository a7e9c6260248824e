//! Identity claim handlers

use axum::{extract::State, Json};
use pasala_service::dto::{
    ApiResponse, ClaimCandidateResponse, ClaimCandidatesQuery, ClaimProfileRequest,
    ProfileResponse,
};
use pasala_service::services::ClaimService;

use crate::extractors::{AuthUser, ValidatedJson, ValidatedQuery};
use crate::response::ApiResult;
use crate::state::AppState;

/// Claim an identity. Supplying names makes it a guided claim.
///
/// POST /claims
pub async fn claim_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ClaimProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ClaimService::new(state.service_context());
    Ok(Json(service.claim(auth.account_id, request).await?))
}

/// Unclaimed identities that may belong to the caller
///
/// GET /claims/candidates?first_name=&last_name=&city=
pub async fn claim_candidates(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedQuery(query): ValidatedQuery<ClaimCandidatesQuery>,
) -> ApiResult<Json<ApiResponse<Vec<ClaimCandidateResponse>>>> {
    let service = ClaimService::new(state.service_context());
    let candidates = service.find_candidates(query).await?;
    Ok(Json(ApiResponse::new(candidates)))
}
