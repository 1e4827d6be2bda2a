//! Domain-specific error types for authentication and related operations
//!
//! The `#[error]` display strings double as the wire-facing messages,
//! so each kind stays distinguishable for client-side branching.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid or expired OTP. Please request a new one.")]
    InvalidOrExpiredOtp,

    #[error("User already exists with this email")]
    AccountExists,

    #[error("No account found with this email address")]
    NoSuchAccount,

    #[error("Failed to send OTP. Please try again.")]
    OtpDeliveryFailed,

    #[error("Too many requests. Please try again later.")]
    RateLimitExceeded,
}

/// Token-related errors
///
/// All of these surface to clients as a 401; the variants exist so the
/// server side can log and test the distinct failure modes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token. User not found.")]
    AccountGone,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
///
/// Validation is rejected before any state mutation; none of these
/// touch the OTP store or a repository.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name must be at least 2 characters long")]
    NameTooShort,

    #[error("Please provide a valid email address")]
    InvalidEmail,

    #[error("Date of birth is required")]
    MissingDateOfBirth,

    #[error("Please provide a valid date of birth")]
    InvalidDateOfBirth,

    #[error("Please provide a valid 6-digit OTP")]
    InvalidOtpFormat,

    #[error("Note title is required")]
    EmptyNoteTitle,

    #[error("Note content is required")]
    EmptyNoteContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_messages_are_distinguishable() {
        let messages = [
            AuthError::InvalidOrExpiredOtp.to_string(),
            AuthError::AccountExists.to_string(),
            AuthError::NoSuchAccount.to_string(),
            AuthError::OtpDeliveryFailed.to_string(),
            AuthError::RateLimitExceeded.to_string(),
        ];
        let unique: std::collections::HashSet<_> = messages.iter().collect();
        assert_eq!(unique.len(), messages.len());
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::NameTooShort.to_string(),
            "Name must be at least 2 characters long"
        );
        assert_eq!(
            ValidationError::InvalidOtpFormat.to_string(),
            "Please provide a valid 6-digit OTP"
        );
    }
}
