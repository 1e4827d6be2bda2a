//! Outbound email delivery.
//!
//! `EmailServiceTrait` lives in the core layer; this module provides
//! the HTTP mail-provider client used in production and a logging mock
//! for development and tests. Delivery is best-effort: a failed send
//! surfaces to the caller, nothing is retried beyond the client's own
//! bounded retry loop.

pub mod http;
pub mod mock;

pub use http::HttpEmailService;
pub use mock::MockEmailService;

/// Subject line for OTP mail
pub const OTP_SUBJECT: &str = "Your OTP for NoteVault";

/// Plain-text body for OTP mail.
pub(crate) fn otp_message_body(code: &str) -> String {
    format!(
        "Hello,\n\n\
         Your One-Time Password (OTP) for NoteVault is: {}\n\n\
         This OTP is valid for 5 minutes only.\n\
         If you didn't request this OTP, please ignore this email.\n\n\
         This is an automated message from NoteVault. Please do not reply to this email.\n",
        code
    )
}
