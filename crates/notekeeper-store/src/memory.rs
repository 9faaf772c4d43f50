//! In-memory backend.
//!
//! Used for local development (`STORE_BACKEND=memory`) and by the server's
//! router tests. Behaves like the Postgres store: unique emails, owner-scoped
//! note access, pinned-first listings, literal search.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use notekeeper_core::{Note, NoteId, SearchQuery, User, UserId, sort_pinned_first};
use tokio::sync::RwLock;

use crate::backend::NoteBackend;
use crate::error::{StoreError, StoreResult};
use crate::models::{NewNote, NewUser, NoteChanges};

#[derive(Debug, Default)]
struct Inner {
    users: HashMap<UserId, User>,
    notes: HashMap<NoteId, Note>,
}

impl Inner {
    fn owned_notes(&self, owner: UserId) -> impl Iterator<Item = &Note> {
        self.notes.values().filter(move |n| n.is_owned_by(owner))
    }
}

/// Store that keeps everything in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered users.
    pub async fn user_count(&self) -> usize {
        self.inner.read().await.users.len()
    }

    /// Total number of notes across all owners.
    pub async fn note_count(&self) -> usize {
        self.inner.read().await.notes.len()
    }
}

#[async_trait]
impl NoteBackend for MemoryStore {
    async fn insert_user(&self, user: &NewUser) -> StoreResult<User> {
        let mut inner = self.inner.write().await;

        if inner.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail(user.email.clone()));
        }

        let record = User {
            id: user.id,
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            created_on: Utc::now(),
        };
        inner.users.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_user(&self, id: UserId) -> StoreResult<Option<User>> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| u.email == email).cloned())
    }

    async fn insert_note(&self, note: &NewNote) -> StoreResult<Note> {
        let mut inner = self.inner.write().await;

        if !inner.users.contains_key(&note.owner) {
            return Err(StoreError::UserNotFound(*note.owner.as_uuid()));
        }

        let now = Utc::now();
        let record = Note {
            id: note.id,
            title: note.title.clone(),
            content: note.content.clone(),
            tags: note.tags.clone(),
            is_pinned: false,
            user_id: note.owner,
            created_on: now,
            updated_on: now,
        };
        inner.notes.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_note(&self, id: NoteId, owner: UserId) -> StoreResult<Option<Note>> {
        let inner = self.inner.read().await;
        Ok(inner
            .notes
            .get(&id)
            .filter(|n| n.is_owned_by(owner))
            .cloned())
    }

    async fn update_note(
        &self,
        id: NoteId,
        owner: UserId,
        changes: &NoteChanges,
    ) -> StoreResult<Option<Note>> {
        let mut inner = self.inner.write().await;

        let Some(note) = inner.notes.get_mut(&id).filter(|n| n.is_owned_by(owner)) else {
            return Ok(None);
        };

        changes.apply_to(note);
        Ok(Some(note.clone()))
    }

    async fn delete_note(&self, id: NoteId, owner: UserId) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;

        let owned = inner.notes.get(&id).is_some_and(|n| n.is_owned_by(owner));
        if owned {
            inner.notes.remove(&id);
        }
        Ok(owned)
    }

    async fn list_notes(&self, owner: UserId) -> StoreResult<Vec<Note>> {
        let inner = self.inner.read().await;
        let mut notes: Vec<Note> = inner.owned_notes(owner).cloned().collect();
        sort_pinned_first(&mut notes);
        Ok(notes)
    }

    async fn search_notes(&self, owner: UserId, query: &SearchQuery) -> StoreResult<Vec<Note>> {
        let inner = self.inner.read().await;
        let mut notes: Vec<Note> = inner
            .owned_notes(owner)
            .filter(|n| query.matches_note(n))
            .cloned()
            .collect();
        sort_pinned_first(&mut notes);
        Ok(notes)
    }
}
