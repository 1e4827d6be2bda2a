//! Authentication request/response DTOs.
//!
//! Fields are camelCase on the wire, matching the client contract.
//! Missing string fields deserialize to empty strings so validation
//! produces the contract's field messages instead of a serde error.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use nv_core::domain::value_objects::Identity;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RequestOtpRequest {
    /// Email address to deliver the code to
    #[serde(default)]
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignUpRequest {
    /// Display name, at least 2 characters
    #[serde(default)]
    #[validate(length(min = 2, message = "Name must be at least 2 characters long"))]
    pub name: String,

    /// Email address
    #[serde(default)]
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,

    /// Date of birth, ISO date (YYYY-MM-DD)
    #[serde(default, rename = "dateOfBirth")]
    #[validate(length(min = 1, message = "Date of birth is required"))]
    pub date_of_birth: String,

    /// The 6-digit code from the OTP email
    #[serde(default)]
    #[validate(length(equal = 6, message = "Please provide a valid 6-digit OTP"))]
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    /// Email address
    #[serde(default)]
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,

    /// The 6-digit code from the OTP email
    #[serde(default)]
    #[validate(length(equal = 6, message = "Please provide a valid 6-digit OTP"))]
    pub otp: String,
}

/// User payload embedded in auth responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<Identity> for UserDto {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            name: identity.name,
            email: identity.email,
        }
    }
}

/// Response for successful signup/signin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSuccessResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user: UserDto,
}

impl AuthSuccessResponse {
    pub fn new(message: impl Into<String>, token: String, user: UserDto) -> Self {
        Self {
            success: true,
            message: message.into(),
            token,
            user,
        }
    }
}

/// Response for GET /api/auth/me
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub success: bool,
    pub user: UserDto,
}
