//! MySQL repository implementations.
//!
//! Expected schema: `accounts` with a unique index on `email` (the
//! correctness backstop for concurrent signups) and `notes` indexed
//! by `owner_id`.

pub mod account_repository_impl;
pub mod note_repository_impl;

pub use account_repository_impl::MySqlAccountRepository;
pub use note_repository_impl::MySqlNoteRepository;

/// Map a sqlx error to true when it is a unique-constraint violation.
pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(
        error.as_database_error().map(|e| e.kind()),
        Some(sqlx::error::ErrorKind::UniqueViolation)
    )
}
