//! Handler for DELETE /api/notes/{id}

use actix_web::{web, HttpResponse};

use nv_core::repositories::{AccountRepository, NoteRepository};
use nv_core::services::verification::{EmailServiceTrait, OtpStoreTrait};
use nv_shared::types::ApiMessage;

use crate::handlers::domain_error_response;
use crate::middleware::AuthContext;
use crate::routes::notes::parse_note_id;
use crate::routes::AppState;

/// Delete one of the caller's notes.
pub async fn delete_note<A, E, S, N>(
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

    match state.note_service.delete(auth.identity.id, id).await {
        Ok(()) => HttpResponse::Ok().json(ApiMessage::ok("Note deleted successfully")),
        Err(error) => domain_error_response(&error),
    }
}
