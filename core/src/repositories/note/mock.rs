//! Mock implementation of NoteRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::note::Note;
use crate::errors::DomainError;

use super::trait_::NoteRepository;

/// Mock note repository for testing
#[derive(Clone)]
pub struct MockNoteRepository {
    notes: Arc<RwLock<HashMap<Uuid, Note>>>,
}

impl MockNoteRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            notes: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockNoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NoteRepository for MockNoteRepository {
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Note>, DomainError> {
        let notes = self.notes.read().await;
        let mut owned: Vec<Note> = notes
            .values()
            .filter(|n| n.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn find_for_owner(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Note>, DomainError> {
        let notes = self.notes.read().await;
        Ok(notes
            .get(&id)
            .filter(|n| n.owner_id == owner_id)
            .cloned())
    }

    async fn insert(&self, note: Note) -> Result<Note, DomainError> {
        let mut notes = self.notes.write().await;
        notes.insert(note.id, note.clone());
        Ok(note)
    }

    async fn update(&self, note: &Note) -> Result<bool, DomainError> {
        let mut notes = self.notes.write().await;
        match notes.get_mut(&note.id) {
            Some(existing) if existing.owner_id == note.owner_id => {
                *existing = note.clone();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_for_owner(&self, id: Uuid, owner_id: Uuid) -> Result<bool, DomainError> {
        let mut notes = self.notes.write().await;
        match notes.get(&id) {
            Some(n) if n.owner_id == owner_id => {
                notes.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
