//! Configuration for the OTP verification service

use crate::domain::entities::one_time_code::DEFAULT_EXPIRATION_MINUTES;

/// Configuration for the OTP verification service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Code expiration time in minutes
    pub code_expiration_minutes: i64,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
        }
    }
}
