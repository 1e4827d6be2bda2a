//! # NoteVault Core
//!
//! Core business logic and domain layer for the NoteVault backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types that form the foundation of the
//! application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Account, Claims, Note, PendingOtp};
pub use domain::value_objects::{AuthOutcome, Identity};
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{
    AccountRepository, MockAccountRepository, MockNoteRepository, NoteRepository,
};
pub use services::{
    AuthService, EmailServiceTrait, NoteService, OtpService, OtpServiceConfig, OtpStoreTrait,
    SessionAuthenticator, SignUpData, TokenService, TokenServiceConfig,
};
