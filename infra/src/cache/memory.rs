//! In-memory pending-OTP store.
//!
//! A process-wide map from email to pending code, constructed once at
//! startup and shared across all request handlers. Entries never
//! survive a restart. Expired entries are evicted lazily when a
//! verification touches them; a `store` for the same email simply
//! overwrites, so no background sweeper is needed.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

use nv_core::domain::entities::one_time_code::PendingOtp;
use nv_core::services::verification::OtpStoreTrait;
use nv_shared::utils::mask_email;

use super::OTP_TTL_SECONDS;

/// In-memory implementation of the pending-OTP store
pub struct InMemoryOtpStore {
    entries: RwLock<HashMap<String, PendingOtp>>,
    ttl: Duration,
}

impl InMemoryOtpStore {
    /// Create a store with the default 5-minute TTL
    pub fn new() -> Self {
        Self::with_ttl_seconds(OTP_TTL_SECONDS)
    }

    /// Create a store with a custom TTL
    pub fn with_ttl_seconds(ttl_seconds: i64) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl: Duration::seconds(ttl_seconds),
        }
    }
}

impl Default for InMemoryOtpStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OtpStoreTrait for InMemoryOtpStore {
    async fn store(&self, email: &str, code: &str) -> Result<(), String> {
        let now = Utc::now();
        let entry = PendingOtp {
            email: email.to_string(),
            code: code.to_string(),
            created_at: now,
            expires_at: now + self.ttl,
        };

        // Replace-or-insert: any previous entry for this email is
        // discarded, invalidating its code permanently
        let mut entries = self.entries.write().await;
        entries.insert(email.to_string(), entry);

        tracing::debug!(
            email = %mask_email(email),
            event = "otp_stored",
            "Stored pending code in memory"
        );

        Ok(())
    }

    async fn verify(&self, email: &str, candidate: &str) -> Result<bool, String> {
        // Check-then-optionally-evict under a single write lock so a
        // concurrent store or clear cannot interleave
        let mut entries = self.entries.write().await;

        match entries.get(email) {
            None => Ok(false),
            Some(entry) if entry.is_expired() => {
                entries.remove(email);
                tracing::debug!(
                    email = %mask_email(email),
                    event = "otp_expired",
                    "Evicted expired pending code"
                );
                Ok(false)
            }
            Some(entry) => Ok(entry.matches(candidate)),
        }
    }

    async fn clear(&self, email: &str) -> Result<(), String> {
        self.entries.write().await.remove(email);
        Ok(())
    }
}
