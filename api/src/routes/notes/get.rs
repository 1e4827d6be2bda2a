//! Handler for GET /api/notes/{id}

use actix_web::{web, HttpResponse};

use nv_core::repositories::{AccountRepository, NoteRepository};
use nv_core::services::verification::{EmailServiceTrait, OtpStoreTrait};

use crate::dto::notes::{NoteDto, NoteResponse};
use crate::handlers::domain_error_response;
use crate::middleware::AuthContext;
use crate::routes::notes::parse_note_id;
use crate::routes::AppState;

/// Fetch one of the caller's notes by ID.
pub async fn get_note<A, E, S, N>(
    state: web::Data<AppState<A, E, S, N>>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    E: EmailServiceTrait + 'static,
    S: OtpStoreTrait + 'static,
    N: NoteRepository + 'static,
{
    let id = match parse_note_id(&path) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.note_service.get(auth.identity.id, id).await {
        Ok(note) => HttpResponse::Ok().json(NoteResponse::new(NoteDto::from(note))),
        Err(error) => domain_error_response(&error),
    }
}
