//! Traits for email delivery and OTP store integration

use async_trait::async_trait;

/// Trait for outbound email delivery
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send a one-time passcode to an email address.
    /// Returns a provider message ID on success.
    async fn send_otp(&self, email: &str, code: &str) -> Result<String, String>;
}

// Allow the provider to be selected at runtime and injected as a
// trait object where a generic parameter is expected
#[async_trait]
impl EmailServiceTrait for std::sync::Arc<dyn EmailServiceTrait> {
    async fn send_otp(&self, email: &str, code: &str) -> Result<String, String> {
        (**self).send_otp(email, code).await
    }
}

/// Trait for the pending-OTP store.
///
/// The store holds at most one live code per email. Implementations
/// must make `store` an atomic replace-or-insert and `verify` an
/// atomic check-then-optionally-evict; no cross-key coordination is
/// required.
#[async_trait]
pub trait OtpStoreTrait: Send + Sync {
    /// Insert or replace the pending code for an email with a fresh
    /// expiry. Any previous entry for that email is discarded.
    async fn store(&self, email: &str, code: &str) -> Result<(), String>;

    /// Check a candidate code.
    ///
    /// Returns `false` when no entry exists; evicts the entry and
    /// returns `false` when it has expired; otherwise compares the
    /// candidate against the stored code. A successful match does NOT
    /// evict - consumption is a separate, explicit `clear`.
    async fn verify(&self, email: &str, candidate: &str) -> Result<bool, String>;

    /// Remove any pending entry for an email. Idempotent.
    async fn clear(&self, email: &str) -> Result<(), String>;
}

// Mirror of the email-service impl: lets the application pick the
// in-memory or networked store at startup
#[async_trait]
impl OtpStoreTrait for std::sync::Arc<dyn OtpStoreTrait> {
    async fn store(&self, email: &str, code: &str) -> Result<(), String> {
        (**self).store(email, code).await
    }

    async fn verify(&self, email: &str, candidate: &str) -> Result<bool, String> {
        (**self).verify(email, candidate).await
    }

    async fn clear(&self, email: &str) -> Result<(), String> {
        (**self).clear(email).await
    }
}
