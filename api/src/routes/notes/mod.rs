//! Notes routes. All are gated by the session authenticator and
//! scoped by the resolved identity.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub use create::create_note;
pub use delete::delete_note;
pub use get::get_note;
pub use list::list_notes;
pub use update::update_note;

use actix_web::HttpResponse;
use uuid::Uuid;

use nv_shared::types::ErrorBody;

/// Parse the `{id}` path segment, rejecting malformed IDs up front.
pub(crate) fn parse_note_id(raw: &str) -> Result<Uuid, HttpResponse> {
    Uuid::parse_str(raw)
        .map_err(|_| HttpResponse::BadRequest().json(ErrorBody::new("Invalid note ID")))
}
