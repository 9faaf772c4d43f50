//! The persistence interface used by the HTTP handlers.
//!
//! Every note operation takes both the note id and the owner id. There is
//! deliberately no way to reach a note by id alone.

use async_trait::async_trait;
use notekeeper_core::{Note, NoteId, SearchQuery, User, UserId};

use crate::error::StoreResult;
use crate::models::{NewNote, NewUser, NoteChanges};

/// Storage backend for users and notes.
#[async_trait]
pub trait NoteBackend: Send + Sync + 'static {
    /// Insert a new user. Fails with `DuplicateEmail` if the email is taken.
    async fn insert_user(&self, user: &NewUser) -> StoreResult<User>;

    /// Get a user by id.
    async fn get_user(&self, id: UserId) -> StoreResult<Option<User>>;

    /// Get a user by email address.
    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Insert a new note.
    async fn insert_note(&self, note: &NewNote) -> StoreResult<Note>;

    /// Get a note if `owner` owns it.
    async fn get_note(&self, id: NoteId, owner: UserId) -> StoreResult<Option<Note>>;

    /// Apply `changes` to a note owned by `owner`; `None` if there is no such note.
    async fn update_note(
        &self,
        id: NoteId,
        owner: UserId,
        changes: &NoteChanges,
    ) -> StoreResult<Option<Note>>;

    /// Delete a note owned by `owner`. Returns whether a note was removed.
    async fn delete_note(&self, id: NoteId, owner: UserId) -> StoreResult<bool>;

    /// All notes of `owner`, pinned first.
    async fn list_notes(&self, owner: UserId) -> StoreResult<Vec<Note>>;

    /// Notes of `owner` whose title, content or a tag contain the query.
    async fn search_notes(&self, owner: UserId, query: &SearchQuery) -> StoreResult<Vec<Note>>;
}
