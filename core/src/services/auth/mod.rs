//! Authentication orchestration for signup, signin, and session
//! validation.

mod service;

#[cfg(test)]
mod tests;

pub use service::{AuthService, SessionAuthenticator, SignUpData};
