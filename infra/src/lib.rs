//! # NoteVault Infrastructure
//!
//! Concrete implementations of the core layer's outward-facing traits:
//! MySQL repositories, the pending-OTP stores (in-memory and Redis),
//! and outbound email delivery.

pub mod cache;
pub mod database;
pub mod email;

use thiserror::Error;

/// Infrastructure-level errors raised while constructing or talking to
/// external systems.
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Email delivery error: {0}")]
    Email(String),
}
