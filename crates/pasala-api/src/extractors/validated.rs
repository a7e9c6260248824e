//! Validated JSON and query extractors
//!
//! Deserialize with axum, then run the `validator` rules on the DTO.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use pasala_core::DomainError;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// Validated JSON body
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(body_rejection)?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

fn body_rejection(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(e) => ApiError::invalid_body(e.body_text()),
        JsonRejection::JsonSyntaxError(e) => ApiError::invalid_body(e.body_text()),
        JsonRejection::MissingJsonContentType(e) => ApiError::invalid_body(e.body_text()),
        JsonRejection::BytesRejection(e) => ApiError::invalid_body(e.body_text()),
        _ => ApiError::invalid_body("Invalid JSON body"),
    }
}

/// Path-qualified detail of a data error, e.g. `sets[0].a: invalid type ...`.
fn score_error(body_text: &str) -> Option<DomainError> {
    let (_, detail) = body_text.split_once(": ")?;
    detail
        .starts_with("sets")
        .then(|| DomainError::InvalidScores(detail.to_string()))
}

/// Validated JSON body that carries set scores.
///
/// Same as `ValidatedJson`, except that a value under `sets` which does not
/// deserialize is reported as `INVALID_SCORES`.
#[derive(Debug, Clone)]
pub struct ScoresJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ScoresJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| match e {
            JsonRejection::JsonDataError(e) => match score_error(&e.body_text()) {
                Some(err) => ApiError::Domain(err),
                None => ApiError::invalid_body(e.body_text()),
            },
            other => body_rejection(other),
        })?;

        value.validate()?;

        Ok(ScoresJson(value))
    }
}

/// Validated query string
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        value.validate()?;

        Ok(ValidatedQuery(value))
    }
}
