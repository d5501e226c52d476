//! Error types for the storage layer.

use noteful_core::{FolderId, NoteId};
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from the driver.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Folder not found.
    #[error("folder not found: {0}")]
    FolderNotFound(FolderId),

    /// Note not found.
    #[error("note not found: {0}")]
    NoteNotFound(NoteId),

    /// Migration error.
    #[error("migration error: {0}")]
    MigrationError(String),
}
