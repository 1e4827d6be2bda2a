//! Verification service module for email OTP authentication
//!
//! This module provides the one-time passcode workflow:
//! - code generation and delivery by email
//! - verification against the pending-code store
//! - explicit consumption after the calling flow succeeds

mod config;
mod service;
mod traits;

#[cfg(test)]
pub mod tests;

pub use config::OtpServiceConfig;
pub use service::OtpService;
pub use traits::{EmailServiceTrait, OtpStoreTrait};
