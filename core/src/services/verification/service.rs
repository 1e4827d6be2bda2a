//! Main OTP verification service implementation

use std::sync::Arc;

use nv_shared::utils::mask_email;

use crate::domain::entities::one_time_code::{PendingOtp, CODE_LENGTH};
use crate::errors::{AuthError, DomainError, DomainResult};

use super::config::OtpServiceConfig;
use super::traits::{EmailServiceTrait, OtpStoreTrait};

/// Verification service for handling email one-time passcodes
pub struct OtpService<E: EmailServiceTrait, S: OtpStoreTrait> {
    /// Email service for delivering codes
    email_service: Arc<E>,
    /// Store holding at most one pending code per email
    store: Arc<S>,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<E: EmailServiceTrait, S: OtpStoreTrait> OtpService<E, S> {
    /// Create a new OTP service
    pub fn new(email_service: Arc<E>, store: Arc<S>, config: OtpServiceConfig) -> Self {
        Self {
            email_service,
            store,
            config,
        }
    }

    /// Generate a fresh code for an email and deliver it.
    ///
    /// The new code replaces any previous pending entry for the same
    /// email - the old code becomes permanently invalid even if it has
    /// not expired yet. The code is stored before the send so a slow
    /// delivery cannot race the client's verification attempt.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Provider message ID of the delivery
    /// * `Err(DomainError)` - Store failure or delivery failure
    pub async fn request_code(&self, email: &str) -> DomainResult<String> {
        let code = PendingOtp::generate_code();

        tracing::info!(
            email = %mask_email(email),
            event = "otp_generated",
            expires_in_minutes = self.config.code_expiration_minutes,
            "Generated new one-time passcode"
        );

        self.store.store(email, &code).await.map_err(|e| {
            tracing::error!(
                email = %mask_email(email),
                error = %e,
                event = "otp_storage_failed",
                "Failed to store one-time passcode"
            );
            DomainError::Internal {
                message: format!("Failed to store one-time passcode: {}", e),
            }
        })?;

        let message_id = self
            .email_service
            .send_otp(email, &code)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(email),
                    error = %e,
                    event = "otp_delivery_failed",
                    "Failed to deliver one-time passcode"
                );
                DomainError::Auth(AuthError::OtpDeliveryFailed)
            })?;

        tracing::info!(
            email = %mask_email(email),
            message_id = %message_id,
            event = "otp_sent",
            "One-time passcode delivered"
        );

        Ok(message_id)
    }

    /// Check a candidate code against the pending entry.
    ///
    /// A match does not consume the code; the calling flow clears it
    /// explicitly once all of its other checks have passed.
    pub async fn verify_code(&self, email: &str, candidate: &str) -> DomainResult<bool> {
        // Malformed candidates never reach the store
        if candidate.len() != CODE_LENGTH || !candidate.chars().all(|c| c.is_ascii_digit()) {
            tracing::warn!(
                email = %mask_email(email),
                event = "invalid_code_format",
                code_length = candidate.len(),
                "Rejected malformed one-time passcode"
            );
            return Ok(false);
        }

        let matched = self.store.verify(email, candidate).await.map_err(|e| {
            tracing::error!(
                email = %mask_email(email),
                error = %e,
                event = "otp_verification_error",
                "Store error during code verification"
            );
            DomainError::Internal {
                message: format!("Failed to verify one-time passcode: {}", e),
            }
        })?;

        if matched {
            tracing::info!(
                email = %mask_email(email),
                event = "otp_verified",
                "One-time passcode verified"
            );
        } else {
            tracing::warn!(
                email = %mask_email(email),
                event = "otp_verification_failed",
                "One-time passcode rejected"
            );
        }

        Ok(matched)
    }

    /// Consume the pending code for an email. Idempotent.
    pub async fn clear(&self, email: &str) -> DomainResult<()> {
        tracing::debug!(
            email = %mask_email(email),
            event = "otp_cleared",
            "Clearing pending one-time passcode"
        );

        self.store
            .clear(email)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to clear one-time passcode: {}", e),
            })
    }
}
