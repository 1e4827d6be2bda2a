//! Handler for GET /api/notes

use actix_web::{web, HttpResponse};

use nv_core::repositories::{AccountRepository, NoteRepository};
use nv_core::services::verification::{EmailServiceTrait, OtpStoreTrait};

use crate::dto::notes::{NoteDto, NotesListResponse};
use crate::handlers::domain_error_response;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// List the caller's notes, newest first. `notes` is always an array.
pub async fn list_notes<A, E, S, N>(
    state: web::Data<AppState<A, E, S, N>>,
    auth: AuthContext,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    E: EmailServiceTrait + 'static,
    S: OtpStoreTrait + 'static,
    N: NoteRepository + 'static,
{
    match state.note_service.list(auth.identity.id).await {
        Ok(notes) => HttpResponse::Ok().json(NotesListResponse {
            success: true,
            notes: notes.into_iter().map(NoteDto::from).collect(),
        }),
        Err(error) => domain_error_response(&error),
    }
}
