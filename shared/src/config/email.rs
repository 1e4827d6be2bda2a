//! Outbound email delivery configuration

use serde::{Deserialize, Serialize};

/// Email delivery provider selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    /// HTTP mail API provider (production)
    Http,
    /// Logging mock (development and tests)
    Mock,
}

/// Email delivery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Which provider implementation to use
    pub provider: EmailProvider,

    /// Base URL of the mail API endpoint
    pub api_url: String,

    /// API key for the mail provider
    pub api_key: String,

    /// From address used on outbound mail
    pub from_address: String,

    /// Maximum retry attempts for failed sends
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Initial retry delay in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Timeout for API requests in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::Mock,
            api_url: String::from("https://api.mailprovider.example/v1/send"),
            api_key: String::new(),
            from_address: String::from("noreply@notevault.app"),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl EmailConfig {
    /// Create from environment variables.
    ///
    /// Selects the HTTP provider only when an API key is configured;
    /// otherwise falls back to the logging mock so local development
    /// works without credentials.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("EMAIL_API_URL") {
            config.api_url = url;
        }
        if let Ok(from) = std::env::var("EMAIL_FROM") {
            config.from_address = from;
        }
        match std::env::var("EMAIL_API_KEY") {
            Ok(key) if !key.is_empty() => {
                config.api_key = key;
                config.provider = EmailProvider::Http;
            }
            _ => config.provider = EmailProvider::Mock,
        }
        config
    }
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_request_timeout_secs() -> u64 {
    30
}
