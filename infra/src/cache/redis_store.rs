//! Redis-backed pending-OTP store.
//!
//! Drop-in replacement for the in-memory store when the API runs on
//! more than one instance. Expiry is enforced by Redis itself via
//! `SET ... EX`, so an expired entry is simply absent on read - the
//! contract's lazy eviction comes for free.

use async_trait::async_trait;
use constant_time_eq::constant_time_eq;
use redis::AsyncCommands;
use tracing::{debug, error};

use nv_core::services::verification::OtpStoreTrait;
use nv_shared::utils::mask_email;

use crate::InfrastructureError;

use super::OTP_TTL_SECONDS;

/// Redis key prefix for pending codes
const OTP_KEY_PREFIX: &str = "otp:pending";

/// Configuration for the Redis OTP store
#[derive(Debug, Clone)]
pub struct RedisOtpStoreConfig {
    /// OTP expiration time in seconds
    pub expiry_seconds: u64,
}

impl Default for RedisOtpStoreConfig {
    fn default() -> Self {
        Self {
            expiry_seconds: OTP_TTL_SECONDS as u64,
        }
    }
}

/// Redis implementation of the pending-OTP store
pub struct RedisOtpStore {
    client: redis::Client,
    config: RedisOtpStoreConfig,
}

impl RedisOtpStore {
    /// Create a new Redis OTP store
    pub fn new(redis_url: &str, config: RedisOtpStoreConfig) -> Result<Self, InfrastructureError> {
        let client = redis::Client::open(redis_url)
            .map_err(|e| InfrastructureError::Cache(format!("Invalid Redis URL: {}", e)))?;
        Ok(Self { client, config })
    }

    fn format_key(email: &str) -> String {
        format!("{}:{}", OTP_KEY_PREFIX, email)
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection, String> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| {
                error!(error = %e, "Redis connection failed");
                format!("Redis connection failed: {}", e)
            })
    }
}

#[async_trait]
impl OtpStoreTrait for RedisOtpStore {
    async fn store(&self, email: &str, code: &str) -> Result<(), String> {
        let mut conn = self.connection().await?;
        let key = Self::format_key(email);

        // SET with EX is an atomic replace-or-insert with a fresh TTL
        let _: () = conn
            .set_ex(&key, code, self.config.expiry_seconds)
            .await
            .map_err(|e| format!("Failed to store code: {}", e))?;

        debug!(
            email = %mask_email(email),
            ttl_seconds = self.config.expiry_seconds,
            event = "otp_stored",
            "Stored pending code in Redis"
        );

        Ok(())
    }

    async fn verify(&self, email: &str, candidate: &str) -> Result<bool, String> {
        let mut conn = self.connection().await?;
        let key = Self::format_key(email);

        let stored: Option<String> = conn
            .get(&key)
            .await
            .map_err(|e| format!("Failed to read code: {}", e))?;

        // Absent covers both "never stored" and "expired": Redis drops
        // the key when the TTL runs out
        match stored {
            None => Ok(false),
            Some(code) => Ok(code.len() == candidate.len()
                && constant_time_eq(code.as_bytes(), candidate.as_bytes())),
        }
    }

    async fn clear(&self, email: &str) -> Result<(), String> {
        let mut conn = self.connection().await?;
        let key = Self::format_key(email);

        // DEL on a missing key is a no-op, which keeps clear idempotent
        let _: u64 = conn
            .del(&key)
            .await
            .map_err(|e| format!("Failed to clear code: {}", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format() {
        assert_eq!(
            RedisOtpStore::format_key("a@x.com"),
            "otp:pending:a@x.com"
        );
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let result = RedisOtpStore::new("not-a-url", RedisOtpStoreConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_default_ttl_is_five_minutes() {
        assert_eq!(RedisOtpStoreConfig::default().expiry_seconds, 300);
    }
}
