//! Handler for POST /api/notes

use actix_web::{web, HttpResponse};
use validator::Validate;

use nv_core::repositories::{AccountRepository, NoteRepository};
use nv_core::services::verification::{EmailServiceTrait, OtpStoreTrait};

use crate::dto::notes::{NoteBodyRequest, NoteDto, NoteResponse};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Create a note for the caller.
pub async fn create_note<A, E, S, N>(
    state: web::Data<AppState<A, E, S, N>>,
    auth: AuthContext,
    request: web::Json<NoteBodyRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    E: EmailServiceTrait + 'static,
    S: OtpStoreTrait + 'static,
    N: NoteRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors, &["title", "content"]);
    }

    match state
        .note_service
        .create(auth.identity.id, &request.title, &request.content)
        .await
    {
        Ok(note) => HttpResponse::Created().json(NoteResponse::with_message(
            "Note created successfully",
            NoteDto::from(note),
        )),
        Err(error) => domain_error_response(&error),
    }
}
