//! Authentication extractor
//!
//! Verifies the bearer token issued by the external identity provider and
//! exposes the account id from its subject.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use pasala_core::AccountId;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub account_id: AccountId,
}

impl AuthUser {
    pub fn new(account_id: AccountId) -> Self {
        Self { account_id }
    }
}

fn verify(state: &AppState, token: &str) -> Result<AuthUser, ApiError> {
    let claims = state.jwt_service().verify(token).map_err(|e| {
        tracing::warn!(error = %e, "Rejected access token");
        ApiError::App(e)
    })?;
    let account_id = claims.account_id().map_err(ApiError::App)?;
    Ok(AuthUser::new(account_id))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        verify(&AppState::from_ref(state), bearer.token())
    }
}
