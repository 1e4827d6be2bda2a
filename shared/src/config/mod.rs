//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT session token configuration
//! - `database` - Database connection and pool configuration
//! - `email` - Outbound email delivery configuration
//! - `environment` - Environment detection
//! - `rate_limit` - Rate limiting for OTP issuance and general traffic
//! - `server` - HTTP server configuration

pub mod auth;
pub mod database;
pub mod email;
pub mod environment;
pub mod rate_limit;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use environment::Environment;
pub use rate_limit::{RateLimitConfig, WindowLimit};
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Session token configuration
    pub jwt: JwtConfig,

    /// Email delivery configuration
    pub email: EmailConfig,

    /// Rate limiting configuration
    pub rate_limit: RateLimitConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            jwt: JwtConfig::default(),
            email: EmailConfig::default(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Every sub-configuration falls back to its defaults when the
    /// corresponding variables are unset, so a bare `.env` is enough
    /// for local development.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            email: EmailConfig::from_env(),
            rate_limit: match environment {
                Environment::Development => RateLimitConfig::development(),
                _ => RateLimitConfig::default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.jwt.token_expiry_seconds, 7 * 86400);
        assert_eq!(config.rate_limit.otp.max_requests, 3);
    }
}
