//! Handler for PUT /api/notes/{id}

use actix_web::{web, HttpResponse};
use validator::Validate;

use nv_core::repositories::{AccountRepository, NoteRepository};
use nv_core::services::verification::{EmailServiceTrait, OtpStoreTrait};

use crate::dto::notes::{NoteBodyRequest, NoteDto, NoteResponse};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::middleware::AuthContext;
use crate::routes::notes::parse_note_id;
use crate::routes::AppState;

/// Update one of the caller's notes.
pub async fn update_note<A, E, S, N>(
    state: web::Data<AppState<A, E, S, N>>,
    auth: AuthContext,
    path: web::Path<String>,
    request: web::Json<NoteBodyRequest>,
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

    if let Err(errors) = request.validate() {
        return validation_error_response(&errors, &["title", "content"]);
    }

    match state
        .note_service
        .update(auth.identity.id, id, &request.title, &request.content)
        .await
    {
        Ok(note) => HttpResponse::Ok().json(NoteResponse::with_message(
            "Note updated successfully",
            NoteDto::from(note),
        )),
        Err(error) => domain_error_response(&error),
    }
}
