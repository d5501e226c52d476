//! Existence guards for item-scoped routes.
//!
//! `find_folder` / `find_note` load an entity by the raw id path segment or
//! fail with `ApiError::NotFound`. The `require_*` middlewares run the guard
//! before the handler and stash the loaded entity in request extensions,
//! where `Extension<Folder>` / `Extension<Note>` can pick it up.
//!
//! Installed with `route_layer`, so they run after routing but before any
//! handler extractor touches the body.

use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::Response,
};
use noteful_core::{Folder, FolderId, Note, NoteId};
use noteful_store::{Store, StoreError};

use crate::error::{ApiError, ApiResult, FOLDER_NOT_FOUND, NOTE_NOT_FOUND};
use crate::state::AppState;

/// Load a folder by its path segment.
///
/// A segment that is not an integer cannot name a row and is reported as
/// not found without querying the store.
pub async fn find_folder(store: &Store, raw_id: &str) -> ApiResult<Folder> {
    let not_found = || ApiError::NotFound(FOLDER_NOT_FOUND.to_string());

    let id: FolderId = raw_id.parse().map_err(|_| not_found())?;

    match store.get_folder(id).await {
        Ok(row) => Ok(row.into()),
        Err(StoreError::FolderNotFound(_)) => Err(not_found()),
        Err(e) => Err(e.into()),
    }
}

/// Load a note by its path segment.
pub async fn find_note(store: &Store, raw_id: &str) -> ApiResult<Note> {
    let not_found = || ApiError::NotFound(NOTE_NOT_FOUND.to_string());

    let id: NoteId = raw_id.parse().map_err(|_| not_found())?;

    match store.get_note(id).await {
        Ok(row) => Ok(row.into()),
        Err(StoreError::NoteNotFound(_)) => Err(not_found()),
        Err(e) => Err(e.into()),
    }
}

/// Reject requests for folders that do not exist.
pub async fn require_folder(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let folder = find_folder(state.store(), &raw_id).await?;
    tracing::debug!(folder_id = folder.id, "Folder exists");

    request.extensions_mut().insert(folder);
    Ok(next.run(request).await)
}

/// Reject requests for notes that do not exist.
pub async fn require_note(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let note = find_note(state.store(), &raw_id).await?;
    tracing::debug!(note_id = note.id, "Note exists");

    request.extensions_mut().insert(note);
    Ok(next.run(request).await)
}
