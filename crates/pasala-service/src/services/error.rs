//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use pasala_common::AppError;
use pasala_core::DomainError;

/// Service layer error type
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Domain rule violation
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Application error (auth, configuration, etc.)
    #[error(transparent)]
    App(#[from] AppError),

    /// Malformed input that passed DTO validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => AppError::status_code_for(e),
            Self::App(e) => e.status_code(),
            Self::Validation(_) => 400,
            Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Domain error carried by this error, if any
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) | Self::App(AppError::Domain(e)) => Some(e),
            _ => None,
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Parse an opaque id from a request body or query string
pub(crate) fn parse_id<T>(field: &'static str, raw: &str) -> ServiceResult<T>
where
    T: std::str::FromStr,
{
    raw.trim()
        .parse()
        .map_err(|_| ServiceError::validation(format!("{field} is not a valid id")))
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pasala_core::{MatchId, PlayerId};

    #[test]
    fn test_domain_error_status() {
        let err = ServiceError::from(DomainError::MatchNotFound(MatchId::new()));
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "MATCH_NOT_FOUND");

        let err = ServiceError::from(DomainError::ClaimIdentityMismatch);
        assert_eq!(err.status_code(), 403);
    }

    #[test]
    fn test_validation_error() {
        let err = ServiceError::validation("sets is required");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_convert_to_app_error() {
        let app_err: AppError = ServiceError::from(DomainError::DuplicatePlayer).into();
        assert_eq!(app_err.status_code(), 409);
        assert_eq!(app_err.error_code(), "DUPLICATE_PLAYER");

        let app_err: AppError = ServiceError::internal("boom").into();
        assert_eq!(app_err.status_code(), 500);
    }

    #[test]
    fn test_parse_id() {
        let id = PlayerId::new();
        let parsed: PlayerId = parse_id("player_id", &id.to_string()).unwrap();
        assert_eq!(parsed, id);

        let err = parse_id::<PlayerId>("player_id", "42").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: player_id is not a valid id");
    }
}
