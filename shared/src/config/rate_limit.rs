//! Rate limiting configuration module

use serde::{Deserialize, Serialize};

/// A fixed-window limit: at most `max_requests` per `window_seconds`
/// per client address.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WindowLimit {
    /// Maximum requests allowed inside one window
    pub max_requests: u32,

    /// Window length in seconds
    pub window_seconds: u64,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// OTP issuance: 3 requests per client address per 60 seconds
    pub otp: WindowLimit,

    /// General traffic: 100 requests per client address per 15 minutes
    pub api: WindowLimit,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            otp: WindowLimit {
                max_requests: 3,
                window_seconds: 60,
            },
            api: WindowLimit {
                max_requests: 100,
                window_seconds: 15 * 60,
            },
        }
    }
}

impl RateLimitConfig {
    /// Create a development configuration (more lenient limits)
    pub fn development() -> Self {
        Self {
            enabled: true,
            otp: WindowLimit {
                max_requests: 30,
                window_seconds: 60,
            },
            api: WindowLimit {
                max_requests: 1000,
                window_seconds: 15 * 60,
            },
        }
    }

    /// Create a production configuration (the contract limits)
    pub fn production() -> Self {
        Self::default()
    }
}

fn default_enabled() -> bool {
    true
}
