//! Database models for the storage layer.
//!
//! These types map directly to database rows and are used for sqlx
//! queries. They convert into the API records in noteful-core.

use chrono::{DateTime, Utc};
use noteful_core::{Folder, Note};
use sqlx::FromRow;

/// Database row for the `noteful_folders` table.
#[derive(Debug, Clone, FromRow)]
pub struct FolderRow {
    pub id: i32,
    pub folder_name: String,
}

impl From<FolderRow> for Folder {
    fn from(row: FolderRow) -> Self {
        Self {
            id: row.id,
            folder_name: row.folder_name,
        }
    }
}

/// Database row for the `noteful_notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: i32,
    pub note_name: String,
    pub modified: DateTime<Utc>,
    pub folder_id: i32,
    pub content: String,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Self {
            id: row.id,
            note_name: row.note_name,
            modified: row.modified,
            folder_id: row.folder_id,
            content: row.content,
        }
    }
}
