//! Route handlers and shared application state.

pub mod auth;
pub mod notes;

use std::sync::Arc;

use nv_core::repositories::{AccountRepository, NoteRepository};
use nv_core::services::auth::AuthService;
use nv_core::services::notes::NoteService;
use nv_core::services::verification::{EmailServiceTrait, OtpStoreTrait};

/// Application state holding the shared services
pub struct AppState<A, E, S, N>
where
    A: AccountRepository,
    E: EmailServiceTrait,
    S: OtpStoreTrait,
    N: NoteRepository,
{
    pub auth_service: Arc<AuthService<A, E, S>>,
    pub note_service: Arc<NoteService<N>>,
}
