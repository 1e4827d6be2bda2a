//! Session token claims for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session token expiration time (7 days)
pub const SESSION_TOKEN_EXPIRY_DAYS: i64 = 7;

/// JWT issuer
pub const JWT_ISSUER: &str = "notevault";

/// Claims structure for the session token payload.
///
/// Tokens are stateless: validity is purely a function of the signature
/// and the `exp` claim. There is no server-side revocation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for a session token.
    ///
    /// # Arguments
    ///
    /// * `account_id` - The account's UUID
    /// * `expiry_seconds` - Token lifetime from now
    pub fn new_session_token(account_id: Uuid, expiry_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expiry_seconds);

        Self {
            sub: account_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: JWT_ISSUER.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the account ID from the claims.
    pub fn account_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_token_claims() {
        let id = Uuid::new_v4();
        let claims = Claims::new_session_token(id, SESSION_TOKEN_EXPIRY_DAYS * 86400);

        assert_eq!(claims.account_id().unwrap(), id);
        assert_eq!(claims.iss, JWT_ISSUER);
        assert_eq!(claims.exp - claims.iat, SESSION_TOKEN_EXPIRY_DAYS * 86400);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_expired_claims() {
        let claims = Claims::new_session_token(Uuid::new_v4(), -60);
        assert!(claims.is_expired());
    }

    #[test]
    fn test_jti_is_unique_per_token() {
        let id = Uuid::new_v4();
        let a = Claims::new_session_token(id, 3600);
        let b = Claims::new_session_token(id, 3600);
        assert_ne!(a.jti, b.jti);
    }
}
