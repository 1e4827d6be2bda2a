//! Business services containing domain logic and use cases.

pub mod auth;
pub mod notes;
pub mod token;
pub mod verification;

// Re-export commonly used types
pub use auth::{AuthService, SessionAuthenticator, SignUpData};
pub use notes::NoteService;
pub use token::{TokenService, TokenServiceConfig};
pub use verification::{EmailServiceTrait, OtpService, OtpServiceConfig, OtpStoreTrait};
