//! Result handlers

use axum::{extract::State, Json};
use pasala_common::AppError;
use pasala_core::MatchId;
use pasala_service::dto::{ResultResponse, SubmitResultRequest};
use pasala_service::services::ResultService;

use crate::extractors::{AuthUser, IdPath, ScoresJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Stored result of a match; 404 until one is submitted
///
/// GET /matches/{match_id}/result
pub async fn get_result(
    State(state): State<AppState>,
    IdPath(match_id): IdPath<MatchId>,
) -> ApiResult<Json<ResultResponse>> {
    let service = ResultService::new(state.service_context());
    let result = service
        .get_result(match_id)
        .await?
        .ok_or_else(|| AppError::not_found("match result"))?;
    Ok(Json(result))
}

/// Submit or replace the result
///
/// PUT /matches/{match_id}/result
pub async fn submit_result(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(match_id): IdPath<MatchId>,
    ScoresJson(request): ScoresJson<SubmitResultRequest>,
) -> ApiResult<Json<ResultResponse>> {
    let service = ResultService::new(state.service_context());
    let response = service.submit_result(match_id, auth.account_id, request).await?;
    Ok(Json(response))
}
