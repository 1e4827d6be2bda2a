//! Configuration for the token service

use nv_shared::config::JwtConfig;

use crate::domain::entities::token::{JWT_ISSUER, SESSION_TOKEN_EXPIRY_DAYS};

/// Configuration for session token issuance and validation.
///
/// The signing secret is injected here at construction time; changing
/// it invalidates every outstanding token.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Shared secret for HS256 signing
    pub jwt_secret: String,

    /// Token lifetime in seconds
    pub token_expiry_seconds: i64,

    /// Expected issuer claim
    pub issuer: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("change-this-secret-in-production"),
            token_expiry_seconds: SESSION_TOKEN_EXPIRY_DAYS * 86400,
            issuer: JWT_ISSUER.to_string(),
        }
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret,
            token_expiry_seconds: config.token_expiry_seconds,
            issuer: config.issuer,
        }
    }
}
