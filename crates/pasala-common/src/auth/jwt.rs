//! Access-token verification
//!
//! Tokens are issued by the external identity provider and signed with a shared
//! HS256 secret. The subject is the account UUID. This service only verifies them;
//! `issue` exists for local tooling and tests.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use pasala_core::AccountId;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Claims {
    /// Get the account ID from the subject
    ///
    /// # Errors
    /// Returns `InvalidToken` if the subject is not a UUID
    pub fn account_id(&self) -> Result<AccountId, AppError> {
        AccountId::parse(&self.sub).map_err(|_| AppError::InvalidToken)
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Verifies bearer access tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    leeway_secs: u64,
}

impl JwtService {
    #[must_use]
    pub fn new(secret: &str, leeway_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            leeway_secs,
        }
    }

    /// Decode and validate an access token
    ///
    /// # Errors
    /// Returns `TokenExpired` or `InvalidToken`
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::default();
        validation.leeway = self.leeway_secs;

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        // Reject malformed subjects at the edge
        data.claims.account_id()?;
        Ok(data.claims)
    }

    /// Sign a token for an account, valid for `ttl_secs`
    ///
    /// # Errors
    /// Returns an internal error if encoding fails
    pub fn issue(&self, account: AccountId, ttl_secs: i64) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: account.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_secs)).timestamp(),
            email: None,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(anyhow::anyhow!("failed to encode JWT: {e}")))
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("leeway_secs", &self.leeway_secs)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret-key-that-is-long-enough", 0)
    }

    #[test]
    fn test_issue_and_verify() {
        let service = create_test_service();
        let account = AccountId::new();

        let token = service.issue(account, 900).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.account_id().unwrap(), account);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_expired_token() {
        let service = create_test_service();
        let token = service.issue(AccountId::new(), -120).unwrap();
        assert!(matches!(service.verify(&token), Err(AppError::TokenExpired)));
    }

    #[test]
    fn test_wrong_secret() {
        let token = create_test_service().issue(AccountId::new(), 900).unwrap();
        let other = JwtService::new("another-secret-entirely", 0);
        assert!(matches!(other.verify(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_invalid_token() {
        let service = create_test_service();
        let result = service.verify("invalid.token.here");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_non_uuid_subject_rejected() {
        let service = create_test_service();
        let claims = Claims {
            sub: "12345".to_string(),
            iat: Utc::now().timestamp(),
            exp: Utc::now().timestamp() + 600,
            email: None,
        };
        let token = encode(&Header::default(), &claims, &service.encoding_key).unwrap();
        assert!(matches!(service.verify(&token), Err(AppError::InvalidToken)));
    }
}
