//! Folder routes.
//!
//! - GET /api/folders - List all folders
//! - POST /api/folders - Create a folder
//! - GET /api/folders/{id} - Get a folder
//! - DELETE /api/folders/{id} - Delete a folder
//! - PATCH /api/folders/{id} - Rename a folder
//!
//! Item routes sit behind the `require_folder` guard, so handlers only run
//! for folders that exist.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    middleware,
    routing::get,
    Extension, Json, Router,
};
use noteful_core::{Folder, FolderId, FolderInput, FolderPatch, NewFolder};

use crate::error::ApiResult;
use crate::extract::JsonBody;
use crate::middleware::existence::require_folder;
use crate::state::AppState;

/// Canonical address of a folder.
fn folder_location(id: FolderId) -> String {
    format!("/api/folders/{}", id)
}

/// GET /api/folders - List all folders.
async fn list_folders(State(state): State<AppState>) -> ApiResult<Json<Vec<Folder>>> {
    let rows = state.store().list_folders().await?;
    let folders: Vec<Folder> = rows.into_iter().map(Folder::from).collect();

    tracing::debug!(count = folders.len(), "Listed folders");

    Ok(Json(folders))
}

/// POST /api/folders - Create a folder.
///
/// # Response
///
/// - 201 Created: the stored folder, with a `Location` header
/// - 400 Bad Request: `folder_name` missing or empty
async fn create_folder(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<FolderInput>,
) -> ApiResult<(StatusCode, [(header::HeaderName, String); 1], Json<Folder>)> {
    let new_folder = NewFolder::try_from(input)?;

    let row = state.store().insert_folder(&new_folder).await?;
    let folder = Folder::from(row);

    tracing::info!(folder_id = folder.id, name = %folder.folder_name, "Folder created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, folder_location(folder.id))],
        Json(folder),
    ))
}

/// GET /api/folders/{id} - Return the folder loaded by the guard.
async fn get_folder(Extension(folder): Extension<Folder>) -> Json<Folder> {
    Json(folder)
}

/// DELETE /api/folders/{id} - Delete a folder.
async fn delete_folder(
    State(state): State<AppState>,
    Path(id): Path<FolderId>,
) -> ApiResult<StatusCode> {
    let removed = state.store().delete_folder(id).await?;

    tracing::info!(folder_id = id, removed, "Folder deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/folders/{id} - Update the provided folder fields.
///
/// # Response
///
/// - 204 No Content
/// - 400 Bad Request: no usable value in the body
async fn update_folder(
    State(state): State<AppState>,
    Path(id): Path<FolderId>,
    JsonBody(input): JsonBody<FolderInput>,
) -> ApiResult<StatusCode> {
    let patch = FolderPatch::try_from(input)?;

    let changed = state.store().update_folder(id, &patch).await?;

    tracing::info!(folder_id = id, changed, "Folder updated");

    Ok(StatusCode::NO_CONTENT)
}

/// Build folder routes.
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/folders", get(list_folders).post(create_folder))
        .route(
            "/api/folders/{id}",
            get(get_folder)
                .delete(delete_folder)
                .patch(update_folder)
                .route_layer(middleware::from_fn_with_state(state, require_folder)),
        )
}
