//! Note repository trait defining the interface for note persistence.
//!
//! Every operation is scoped by the owning account's ID; a note that
//! belongs to another account is indistinguishable from a missing one.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::note::Note;
use crate::errors::DomainError;

/// Repository trait for Note entity persistence operations
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// List all notes for an owner, newest first.
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Note>, DomainError>;

    /// Find a single note by ID, scoped to the owner.
    async fn find_for_owner(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Note>, DomainError>;

    /// Insert a new note.
    async fn insert(&self, note: Note) -> Result<Note, DomainError>;

    /// Persist an updated note, scoped to the owner.
    ///
    /// # Returns
    /// * `Ok(true)` - Note was updated
    /// * `Ok(false)` - No note with this ID belongs to the owner
    async fn update(&self, note: &Note) -> Result<bool, DomainError>;

    /// Delete a note by ID, scoped to the owner.
    ///
    /// # Returns
    /// * `Ok(true)` - Note was deleted
    /// * `Ok(false)` - No note with this ID belongs to the owner
    async fn delete_for_owner(&self, id: Uuid, owner_id: Uuid) -> Result<bool, DomainError>;
}
