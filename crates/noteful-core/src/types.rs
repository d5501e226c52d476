//! Core data types for the Noteful API.
//!
//! Records (`Folder`, `Note`) are what the API returns. Inputs (`FolderInput`,
//! `NoteInput`, `NoteUpdateInput`) are what clients send, with every field
//! optional so that a missing field is reported by validation rather than by
//! the JSON decoder.
//! The validated types are what the store accepts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Primary key of a folder.
pub type FolderId = i32;

/// Primary key of a note.
pub type NoteId = i32;

// ============================================================================
// Records
// ============================================================================

/// A folder as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    pub folder_name: String,
}

/// A note as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub note_name: String,
    pub modified: DateTime<Utc>,
    pub folder_id: FolderId,
    pub content: String,
}

// ============================================================================
// Request inputs
// ============================================================================

/// Request body for folder creation and update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FolderInput {
    pub folder_name: Option<String>,
}

/// Request body for note creation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NoteInput {
    pub note_name: Option<String>,
    pub modified: Option<DateTime<Utc>>,
    pub folder_id: Option<FolderId>,
    pub content: Option<String>,
}

/// Request body for note updates.
///
/// Only the updatable fields are declared, so anything else in the body
/// (including a malformed `modified` or `folder_id`) is skipped unread.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NoteUpdateInput {
    pub note_name: Option<String>,
    pub content: Option<String>,
}

/// Drop empty strings, leaving only values that count as provided.
fn provided(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

// ============================================================================
// Validated inputs
// ============================================================================

/// Validated input for creating a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFolder {
    pub folder_name: String,
}

impl NewFolder {
    pub fn new(folder_name: impl Into<String>) -> Self {
        Self {
            folder_name: folder_name.into(),
        }
    }
}

impl TryFrom<FolderInput> for NewFolder {
    type Error = ValidationError;

    fn try_from(input: FolderInput) -> Result<Self, Self::Error> {
        provided(input.folder_name)
            .map(|folder_name| Self { folder_name })
            .ok_or(ValidationError::InvalidFolderName)
    }
}

/// Validated partial update for a folder.
///
/// Fields left as `None` are not written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderPatch {
    pub folder_name: Option<String>,
}

impl TryFrom<FolderInput> for FolderPatch {
    type Error = ValidationError;

    fn try_from(input: FolderInput) -> Result<Self, Self::Error> {
        let patch = Self {
            folder_name: provided(input.folder_name),
        };

        if patch.folder_name.is_none() {
            return Err(ValidationError::EmptyUpdate);
        }
        Ok(patch)
    }
}

/// Validated input for creating a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub note_name: String,
    pub modified: DateTime<Utc>,
    pub folder_id: FolderId,
    pub content: String,
}

impl TryFrom<NoteInput> for NewNote {
    type Error = ValidationError;

    /// Fields are checked in declaration order and the first missing one is
    /// reported. Empty strings are accepted here; only absence is an error.
    fn try_from(input: NoteInput) -> Result<Self, Self::Error> {
        let note_name = input
            .note_name
            .ok_or(ValidationError::MissingField("note_name"))?;
        let modified = input
            .modified
            .ok_or(ValidationError::MissingField("modified"))?;
        let folder_id = input
            .folder_id
            .ok_or(ValidationError::MissingField("folder_id"))?;
        let content = input
            .content
            .ok_or(ValidationError::MissingField("content"))?;

        Ok(Self {
            note_name,
            modified,
            folder_id,
            content,
        })
    }
}

/// Validated partial update for a note. Only name and content are updatable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePatch {
    pub note_name: Option<String>,
    pub content: Option<String>,
}

impl TryFrom<NoteUpdateInput> for NotePatch {
    type Error = ValidationError;

    fn try_from(input: NoteUpdateInput) -> Result<Self, Self::Error> {
        let patch = Self {
            note_name: provided(input.note_name),
            content: provided(input.content),
        };

        if patch.note_name.is_none() && patch.content.is_none() {
            return Err(ValidationError::EmptyUpdate);
        }
        Ok(patch)
    }
}
