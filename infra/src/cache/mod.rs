//! Pending-OTP store implementations.
//!
//! The store contract lives in `nv_core::services::verification`. Two
//! backends are provided: a process-wide in-memory map (the default -
//! codes do not survive a restart) and a Redis-backed store for
//! multi-instance deployments. Both honor the same semantics:
//! replace-on-store, lazy expiry, no eviction on a successful match,
//! idempotent clear.

pub mod memory;
pub mod redis_store;

pub use memory::InMemoryOtpStore;
pub use redis_store::{RedisOtpStore, RedisOtpStoreConfig};

/// Default OTP time-to-live in seconds (5 minutes)
pub const OTP_TTL_SECONDS: i64 = 300;
