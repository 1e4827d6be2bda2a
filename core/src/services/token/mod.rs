//! Token service module for session token issuance and validation
//!
//! Session tokens are stateless HS256 JWTs: validity is purely a
//! function of the signature and the expiry claim. There is no refresh
//! mechanism; clients re-authenticate via OTP after expiry.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
