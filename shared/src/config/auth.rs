//! Session token configuration
//!
//! The signing secret and token lifetime are injected into the token
//! service at construction; nothing in the core layer reads them from
//! the environment directly.

use serde::{Deserialize, Serialize};

/// Default session token lifetime: 7 days
const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 7 * 86400;

/// JWT session token configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens. Changing the secret
    /// invalidates every outstanding token.
    pub secret: String,

    /// Session token expiry time in seconds
    pub token_expiry_seconds: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("change-this-secret-in-production"),
            token_expiry_seconds: DEFAULT_TOKEN_EXPIRY_SECONDS,
            issuer: String::from("notevault"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            config.secret = secret;
        }
        if let Ok(days) = std::env::var("JWT_EXPIRE_DAYS") {
            if let Ok(days) = days.parse::<i64>() {
                config.token_expiry_seconds = days * 86400;
            }
        }
        config
    }

    /// Set the token expiry in days
    pub fn with_expiry_days(mut self, days: i64) -> Self {
        self.token_expiry_seconds = days * 86400;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "change-this-secret-in-production"
    }
}
