//! Pending one-time passcode entity for email-based authentication.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};

/// Length of the one-time passcode
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for pending codes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// An outstanding verification challenge for one email address.
///
/// At most one pending code is live per email; a newer request replaces
/// the previous entry in the store. Entries are never mutated, only
/// replaced or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingOtp {
    /// Email address this code was issued for (case-normalized)
    pub email: String,

    /// The 6-digit code
    pub code: String,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl PendingOtp {
    /// Creates a new pending code with the default 5-minute expiration.
    pub fn new(email: String) -> Self {
        Self::new_with_expiration(email, DEFAULT_EXPIRATION_MINUTES)
    }

    /// Creates a new pending code with a custom expiration time.
    pub fn new_with_expiration(email: String, expiration_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            email,
            code: Self::generate_code(),
            created_at: now,
            expires_at: now + Duration::minutes(expiration_minutes),
        }
    }

    /// Generates a random 6-digit code in [100000, 999999].
    ///
    /// Uses the OS CSPRNG. The range excludes leading zeros, so the
    /// code is always exactly six digits.
    pub fn generate_code() -> String {
        let code: u32 = OsRng.gen_range(100_000..=999_999);
        code.to_string()
    }

    /// Checks if the code has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Compares a candidate code against this one in constant time.
    ///
    /// Expiry is not checked here; callers evict expired entries first.
    pub fn matches(&self, candidate: &str) -> bool {
        self.code.len() == candidate.len()
            && constant_time_eq(self.code.as_bytes(), candidate.as_bytes())
    }
}
