//! MySQL implementation of the NoteRepository trait.
//!
//! Every statement includes `owner_id` in its WHERE clause so a note
//! belonging to another account behaves exactly like a missing one.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use nv_core::domain::entities::note::Note;
use nv_core::errors::DomainError;
use nv_core::repositories::NoteRepository;

/// MySQL implementation of NoteRepository
pub struct MySqlNoteRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlNoteRepository {
    /// Create a new MySQL note repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Note entity
    fn row_to_note(row: &sqlx::mysql::MySqlRow) -> Result<Note, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;
        let owner_id: String = row.try_get("owner_id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get owner_id: {}", e),
        })?;

        Ok(Note {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid UUID in notes.id: {}", e),
            })?,
            owner_id: Uuid::parse_str(&owner_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid UUID in notes.owner_id: {}", e),
            })?,
            title: row.try_get("title").map_err(|e| DomainError::Internal {
                message: format!("Failed to get title: {}", e),
            })?,
            content: row.try_get("content").map_err(|e| DomainError::Internal {
                message: format!("Failed to get content: {}", e),
            })?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at").map_err(|e| {
                DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                }
            })?,
            updated_at: row
                .try_get::<Option<DateTime<Utc>>, _>("updated_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl NoteRepository for MySqlNoteRepository {
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Note>, DomainError> {
        let query = r#"
            SELECT id, owner_id, title, content, created_at, updated_at
            FROM notes
            WHERE owner_id = ?
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(owner_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Database query failed: {}", e),
            })?;

        rows.iter().map(Self::row_to_note).collect()
    }

    async fn find_for_owner(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Note>, DomainError> {
        let query = r#"
            SELECT id, owner_id, title, content, created_at, updated_at
            FROM notes
            WHERE id = ? AND owner_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_note(&row)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, note: Note) -> Result<Note, DomainError> {
        let query = r#"
            INSERT INTO notes (id, owner_id, title, content, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(note.id.to_string())
            .bind(note.owner_id.to_string())
            .bind(&note.title)
            .bind(&note.content)
            .bind(note.created_at)
            .bind(note.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to create note: {}", e),
            })?;

        Ok(note)
    }

    async fn update(&self, note: &Note) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE notes
            SET title = ?, content = ?, updated_at = ?
            WHERE id = ? AND owner_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&note.title)
            .bind(&note.content)
            .bind(note.updated_at)
            .bind(note.id.to_string())
            .bind(note.owner_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to update note: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_for_owner(&self, id: Uuid, owner_id: Uuid) -> Result<bool, DomainError> {
        let query = r#"
            DELETE FROM notes
            WHERE id = ? AND owner_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete note: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
