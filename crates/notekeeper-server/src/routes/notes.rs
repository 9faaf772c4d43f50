//! Note routes. Every handler requires a `CurrentUser` and scopes all
//! store calls to that user's id.
//!
//! - POST /add-note
//! - PUT /edit-note/{note_id}
//! - GET /get-all-notes
//! - DELETE /delete-note/{note_id}
//! - PUT /update-note-pinned/{note_id}
//! - GET /search-notes?query=...

use axum::{
    Router,
    extract::State,
    routing::{delete, get, post, put},
};
use notekeeper_core::{Note, NoteId, SearchQuery};
use notekeeper_store::{NewNote, NoteChanges};
use serde::{Deserialize, Serialize};

use crate::envelope::Envelope;
use crate::error::{ApiError, ApiResult};
use crate::extract::{CurrentUser, JsonBody, PathParam, QueryParams, present};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Body of POST /add-note.
#[derive(Debug, Deserialize)]
pub struct AddNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Body of PUT /edit-note/{note_id}.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_pinned: Option<bool>,
}

/// Body of PUT /update-note-pinned/{note_id}.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPinnedRequest {
    pub is_pinned: Option<bool>,
}

/// Query string of GET /search-notes.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// Validated title, content and tags shared by add and edit.
#[derive(Debug)]
pub struct NoteFields {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

fn note_fields(
    title: Option<String>,
    content: Option<String>,
    tags: Option<Vec<String>>,
) -> ApiResult<NoteFields> {
    match (present(title), present(content)) {
        (Some(title), Some(content)) => Ok(NoteFields {
            title,
            content,
            tags: tags.unwrap_or_default(),
        }),
        _ => Err(ApiError::Validation(
            "Title and content are required".to_string(),
        )),
    }
}

impl AddNoteRequest {
    pub fn validate(self) -> ApiResult<NoteFields> {
        note_fields(self.title, self.content, self.tags)
    }
}

impl EditNoteRequest {
    /// Omitted tags are cleared; an omitted `isPinned` keeps the stored value.
    pub fn validate(self) -> ApiResult<NoteChanges> {
        let fields = note_fields(self.title, self.content, self.tags)?;
        let mut changes = NoteChanges::new()
            .title(fields.title)
            .content(fields.content)
            .tags(fields.tags);
        if let Some(is_pinned) = self.is_pinned {
            changes = changes.pinned(is_pinned);
        }
        Ok(changes)
    }
}

impl SetPinnedRequest {
    pub fn validate(self) -> ApiResult<NoteChanges> {
        self.is_pinned
            .map(|is_pinned| NoteChanges::new().pinned(is_pinned))
            .ok_or_else(|| ApiError::Validation("isPinned is required".to_string()))
    }
}

#[derive(Debug, Serialize)]
pub struct NotePayload {
    pub note: Note,
}

#[derive(Debug, Serialize)]
pub struct NotesPayload {
    pub notes: Vec<Note>,
}

// ============================================================================
// Helper Functions
// ============================================================================

fn note_not_found() -> ApiError {
    ApiError::NotFound("Note not found".to_string())
}

/// Parse a path segment as a note id. A malformed id cannot name a note
/// the caller owns, so it is reported the same way as a missing one.
fn parse_note_id(raw: &str) -> ApiResult<NoteId> {
    raw.parse().map_err(|_| note_not_found())
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /add-note
async fn add_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    JsonBody(request): JsonBody<AddNoteRequest>,
) -> ApiResult<Envelope<NotePayload>> {
    let fields = request.validate()?;

    let new_note = NewNote::new(user.id, fields.title, fields.content, fields.tags);
    let note = state.store().insert_note(&new_note).await?;

    tracing::info!(user_id = %user.id, note_id = %note.id, "Note added");

    Ok(Envelope::success("Note added successfully", NotePayload { note }))
}

/// PUT /edit-note/{note_id}
async fn edit_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    PathParam(note_id): PathParam<String>,
    JsonBody(request): JsonBody<EditNoteRequest>,
) -> ApiResult<Envelope<NotePayload>> {
    let changes = request.validate()?;
    let note_id = parse_note_id(&note_id)?;

    let note = state
        .store()
        .update_note(note_id, user.id, &changes)
        .await?
        .ok_or_else(note_not_found)?;

    tracing::info!(user_id = %user.id, note_id = %note.id, "Note updated");

    Ok(Envelope::success(
        "Note updated successfully",
        NotePayload { note },
    ))
}

/// GET /get-all-notes
async fn get_all_notes(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Envelope<NotesPayload>> {
    let notes = state.store().list_notes(user.id).await?;

    tracing::debug!(user_id = %user.id, count = notes.len(), "Listed notes");

    Ok(Envelope::success(
        "All notes retrieved successfully",
        NotesPayload { notes },
    ))
}

/// DELETE /delete-note/{note_id}
async fn delete_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    PathParam(note_id): PathParam<String>,
) -> ApiResult<Envelope> {
    let note_id = parse_note_id(&note_id)?;

    if !state.store().delete_note(note_id, user.id).await? {
        return Err(note_not_found());
    }

    tracing::info!(user_id = %user.id, note_id = %note_id, "Note deleted");

    Ok(Envelope::ack("Note deleted successfully"))
}

/// PUT /update-note-pinned/{note_id}
async fn update_note_pinned(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    PathParam(note_id): PathParam<String>,
    JsonBody(request): JsonBody<SetPinnedRequest>,
) -> ApiResult<Envelope<NotePayload>> {
    let note_id = parse_note_id(&note_id)?;
    let changes = request.validate()?;

    let note = state
        .store()
        .update_note(note_id, user.id, &changes)
        .await?
        .ok_or_else(note_not_found)?;

    tracing::info!(
        user_id = %user.id,
        note_id = %note.id,
        is_pinned = note.is_pinned,
        "Note pin changed"
    );

    Ok(Envelope::success(
        "Note pinned status updated successfully",
        NotePayload { note },
    ))
}

/// GET /search-notes?query=...
async fn search_notes(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    QueryParams(params): QueryParams<SearchParams>,
) -> ApiResult<Envelope<NotesPayload>> {
    let raw = present(params.query)
        .ok_or_else(|| ApiError::Validation("Query is required".to_string()))?;
    let query = SearchQuery::new(raw).map_err(|e| ApiError::Validation(e.to_string()))?;

    let notes = state.store().search_notes(user.id, &query).await?;

    tracing::debug!(
        user_id = %user.id,
        query = query.raw(),
        count = notes.len(),
        "Searched notes"
    );

    Ok(Envelope::success(
        "Notes matching search query retrieved successfully",
        NotesPayload { notes },
    ))
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/add-note", post(add_note))
        .route("/edit-note/{note_id}", put(edit_note))
        .route("/get-all-notes", get(get_all_notes))
        .route("/delete-note/{note_id}", delete(delete_note))
        .route("/update-note-pinned/{note_id}", put(update_note_pinned))
        .route("/search-notes", get(search_notes))
}
