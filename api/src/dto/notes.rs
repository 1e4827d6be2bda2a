//! Notes request/response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use nv_core::domain::entities::note::Note;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NoteBodyRequest {
    /// Note title
    #[serde(default)]
    #[validate(length(min = 1, message = "Note title is required"))]
    pub title: String,

    /// Note body
    #[serde(default)]
    #[validate(length(min = 1, message = "Note content is required"))]
    pub content: String,
}

/// Note payload as it appears on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteDto {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
}

impl From<Note> for NoteDto {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            created_at: note.created_at,
            updated_at: note.updated_at,
            user_id: note.owner_id,
        }
    }
}

/// Response for GET /api/notes - `notes` is always an array
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotesListResponse {
    pub success: bool,
    pub notes: Vec<NoteDto>,
}

/// Response carrying a single note
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub note: NoteDto,
}

impl NoteResponse {
    pub fn new(note: NoteDto) -> Self {
        Self {
            success: true,
            message: None,
            note,
        }
    }

    pub fn with_message(message: impl Into<String>, note: NoteDto) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            note,
        }
    }
}
