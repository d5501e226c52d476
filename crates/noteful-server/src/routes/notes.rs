//! Note routes.
//!
//! - GET /api/notes - List all notes
//! - POST /api/notes - Create a note
//! - GET /api/notes/{id} - Get a note
//! - DELETE /api/notes/{id} - Delete a note
//! - PATCH /api/notes/{id} - Update a note's name and/or content

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    middleware,
    routing::get,
    Extension, Json, Router,
};
use noteful_core::{NewNote, Note, NoteId, NoteInput, NotePatch, NoteUpdateInput};

use crate::error::ApiResult;
use crate::extract::JsonBody;
use crate::middleware::existence::require_note;
use crate::state::AppState;

/// Canonical address of a note.
fn note_location(id: NoteId) -> String {
    format!("/api/notes/{}", id)
}

/// GET /api/notes - List all notes.
async fn list_notes(State(state): State<AppState>) -> ApiResult<Json<Vec<Note>>> {
    let rows = state.store().list_notes().await?;
    let notes: Vec<Note> = rows.into_iter().map(Note::from).collect();

    tracing::debug!(count = notes.len(), "Listed notes");

    Ok(Json(notes))
}

/// POST /api/notes - Create a note.
///
/// All of `note_name`, `modified`, `folder_id` and `content` are required;
/// the first one missing is named in the 400 response.
async fn create_note(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<NoteInput>,
) -> ApiResult<(StatusCode, [(header::HeaderName, String); 1], Json<Note>)> {
    let new_note = NewNote::try_from(input)?;

    let row = state.store().insert_note(&new_note).await?;
    let note = Note::from(row);

    tracing::info!(
        note_id = note.id,
        folder_id = note.folder_id,
        "Note created"
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, note_location(note.id))],
        Json(note),
    ))
}

/// GET /api/notes/{id}
async fn get_note(Extension(note): Extension<Note>) -> Json<Note> {
    Json(note)
}

/// DELETE /api/notes/{id}
async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<NoteId>,
) -> ApiResult<StatusCode> {
    let removed = state.store().delete_note(id).await?;

    tracing::info!(note_id = id, removed, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/notes/{id}
///
/// Only `note_name` and `content` are read from the body; other keys are
/// ignored whatever their value.
async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<NoteId>,
    JsonBody(input): JsonBody<NoteUpdateInput>,
) -> ApiResult<StatusCode> {
    let patch = NotePatch::try_from(input)?;

    let changed = state.store().update_note(id, &patch).await?;

    tracing::info!(note_id = id, changed, "Note updated");

    Ok(StatusCode::NO_CONTENT)
}

/// Build note routes.
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route(
            "/api/notes/{id}",
            get(get_note)
                .delete(delete_note)
                .patch(update_note)
                .route_layer(middleware::from_fn_with_state(state, require_note)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::parse_json_body;
    use crate::routes::{build_router, test_support};
    use serde_json::json;

    #[tokio::test]
    async fn test_create_names_first_missing_field() {
        let cases = [
            ("{}", "note_name"),
            (r#"{"note_name": "Dogs"}"#, "modified"),
            (
                r#"{"note_name": "Dogs", "modified": "2019-01-03T00:00:00Z", "content": "Woof"}"#,
                "folder_id",
            ),
            (
                r#"{"note_name": "Dogs", "modified": "2019-01-03T00:00:00Z", "folder_id": 1}"#,
                "content",
            ),
        ];

        for (body, field) in cases {
            let app = build_router(test_support::lazy_state());
            let (status, json) = test_support::send_json(app, "POST", "/api/notes", body).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(
                json,
                json!({ "error": { "message": format!("Missing '{field}' in request body") } })
            );
        }
    }

    #[tokio::test]
    async fn test_create_rejects_bad_timestamp() {
        let body = r#"{"note_name": "Dogs", "modified": "yesterday", "folder_id": 1, "content": "Woof"}"#;
        let app = build_router(test_support::lazy_state());
        let (status, json) = test_support::send_json(app, "POST", "/api/notes", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid JSON body"));
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_not_found() {
        for method in ["GET", "DELETE", "PATCH"] {
            let app = build_router(test_support::lazy_state());
            let (status, json) =
                test_support::send_json(app, method, "/api/notes/first", "").await;

            assert_eq!(status, StatusCode::NOT_FOUND, "method: {method}");
            assert_eq!(json, json!({ "error": { "message": "Note does not exist" } }));
        }
    }

    #[test]
    fn test_update_body_ignores_malformed_extra_fields() {
        let input: NoteUpdateInput =
            parse_json_body(br#"{"content": "new body", "modified": "not a date"}"#).unwrap();
        let patch = NotePatch::try_from(input).unwrap();
        assert_eq!(patch.content.as_deref(), Some("new body"));

        let input: NoteUpdateInput =
            parse_json_body(br#"{"note_name": "Cats", "folder_id": "2"}"#).unwrap();
        let patch = NotePatch::try_from(input).unwrap();
        assert_eq!(patch.note_name.as_deref(), Some("Cats"));
    }

    #[test]
    fn test_note_location() {
        assert_eq!(note_location(3), "/api/notes/3");
    }
}
