//! Note service implementation
//!
//! A thin layer over the note repository: it validates input, scopes
//! every operation by the authenticated owner's ID, and keeps the
//! "missing or not yours" cases indistinguishable.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::note::Note;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::NoteRepository;

/// Service for note CRUD scoped by owner
pub struct NoteService<N: NoteRepository> {
    repository: Arc<N>,
}

impl<N: NoteRepository> NoteService<N> {
    /// Create a new note service
    pub fn new(repository: Arc<N>) -> Self {
        Self { repository }
    }

    /// List all notes owned by an account, newest first.
    pub async fn list(&self, owner_id: Uuid) -> DomainResult<Vec<Note>> {
        self.repository.list_by_owner(owner_id).await
    }

    /// Create a note for an account.
    pub async fn create(&self, owner_id: Uuid, title: &str, content: &str) -> DomainResult<Note> {
        let (title, content) = Self::validate_fields(title, content)?;

        let note = self.repository.insert(Note::new(owner_id, title, content)).await?;

        tracing::info!(
            note_id = %note.id,
            owner_id = %owner_id,
            event = "note_created",
            "Note created"
        );

        Ok(note)
    }

    /// Fetch a single note owned by the account.
    pub async fn get(&self, owner_id: Uuid, id: Uuid) -> DomainResult<Note> {
        self.repository
            .find_for_owner(id, owner_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "Note".to_string(),
            })
    }

    /// Update a note owned by the account.
    pub async fn update(
        &self,
        owner_id: Uuid,
        id: Uuid,
        title: &str,
        content: &str,
    ) -> DomainResult<Note> {
        let (title, content) = Self::validate_fields(title, content)?;

        let mut note = self.get(owner_id, id).await?;
        note.apply_update(title, content);

        if !self.repository.update(&note).await? {
            // The note vanished between the read and the write
            return Err(DomainError::NotFound {
                resource: "Note".to_string(),
            });
        }

        Ok(note)
    }

    /// Delete a note owned by the account.
    pub async fn delete(&self, owner_id: Uuid, id: Uuid) -> DomainResult<()> {
        if !self.repository.delete_for_owner(id, owner_id).await? {
            return Err(DomainError::NotFound {
                resource: "Note".to_string(),
            });
        }

        tracing::info!(
            note_id = %id,
            owner_id = %owner_id,
            event = "note_deleted",
            "Note deleted"
        );

        Ok(())
    }

    fn validate_fields(title: &str, content: &str) -> Result<(String, String), ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyNoteTitle);
        }
        let content = content.trim();
        if content.is_empty() {
            return Err(ValidationError::EmptyNoteContent);
        }
        Ok((title.to_string(), content.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockNoteRepository;

    fn service() -> NoteService<MockNoteRepository> {
        NoteService::new(Arc::new(MockNoteRepository::new()))
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let service = service();
        let owner = Uuid::new_v4();

        service.create(owner, "  First  ", "one").await.unwrap();
        service.create(owner, "Second", "two").await.unwrap();

        let notes = service.list(owner).await.unwrap();
        assert_eq!(notes.len(), 2);
        // Titles are stored trimmed
        assert!(notes.iter().any(|n| n.title == "First"));
    }

    #[tokio::test]
    async fn test_create_rejects_blank_fields() {
        let service = service();
        let owner = Uuid::new_v4();

        let err = service.create(owner, "   ", "content").await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::EmptyNoteTitle)
        ));

        let err = service.create(owner, "title", "").await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::EmptyNoteContent)
        ));
    }

    #[tokio::test]
    async fn test_ownership_scoping() {
        let service = service();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let note = service.create(owner, "mine", "secret").await.unwrap();

        // Another account cannot see, update, or delete the note
        assert!(service.get(stranger, note.id).await.is_err());
        assert!(service.update(stranger, note.id, "x", "y").await.is_err());
        assert!(service.delete(stranger, note.id).await.is_err());

        // The owner still can
        assert_eq!(service.get(owner, note.id).await.unwrap().id, note.id);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let service = service();
        let owner = Uuid::new_v4();
        let note = service.create(owner, "draft", "v1").await.unwrap();

        let updated = service.update(owner, note.id, "final", "v2").await.unwrap();
        assert_eq!(updated.title, "final");
        assert!(updated.updated_at.is_some());

        service.delete(owner, note.id).await.unwrap();
        let err = service.get(owner, note.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
