//! Authentication routes.

pub mod me;
pub mod request_otp;
pub mod signin;
pub mod signup;

pub use me::me;
pub use request_otp::request_otp;
pub use signin::signin;
pub use signup::signup;

use chrono::NaiveDate;

use nv_core::errors::{DomainError, ValidationError};

/// Parse a date-of-birth string: ISO date first, full RFC 3339
/// timestamp as a fallback for clients that send one.
pub(crate) fn parse_date_of_birth(raw: &str) -> Result<NaiveDate, DomainError> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .map_err(|_| ValidationError::InvalidDateOfBirth.into())
}
