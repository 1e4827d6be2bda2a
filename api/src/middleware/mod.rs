//! HTTP middleware: session authentication, CORS, and rate limiting.

pub mod auth;
pub mod cors;
pub mod rate_limit;

pub use auth::{AuthContext, SessionAuth};
pub use rate_limit::RateLimiter;
