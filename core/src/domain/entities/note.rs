//! Note entity owned by a single account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A personal text note.
///
/// Every note belongs to exactly one account; all repository access is
/// scoped by `owner_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier for the note
    pub id: Uuid,

    /// Account that owns this note
    pub owner_id: Uuid,

    /// Note title
    pub title: String,

    /// Note body
    pub content: String,

    /// Timestamp when the note was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last update, if any
    pub updated_at: Option<DateTime<Utc>>,
}

impl Note {
    /// Creates a new note for the given owner.
    pub fn new(owner_id: Uuid, title: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            title,
            content,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Replaces title and content, stamping the update time.
    pub fn apply_update(&mut self, title: String, content: String) {
        self.title = title;
        self.content = content;
        self.updated_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note() {
        let owner = Uuid::new_v4();
        let note = Note::new(owner, "Groceries".to_string(), "Milk, eggs".to_string());

        assert_eq!(note.owner_id, owner);
        assert_eq!(note.title, "Groceries");
        assert!(note.updated_at.is_none());
    }

    #[test]
    fn test_apply_update_stamps_time() {
        let mut note = Note::new(Uuid::new_v4(), "a".to_string(), "b".to_string());
        note.apply_update("c".to_string(), "d".to_string());

        assert_eq!(note.title, "c");
        assert_eq!(note.content, "d");
        assert!(note.updated_at.is_some());
    }
}
