//! Database models for the storage layer.
//!
//! Row types map directly to the `users` and `notes` tables and convert into
//! the domain types from notekeeper-core. Input types describe inserts and
//! owner-scoped updates.

use chrono::{DateTime, Utc};
use notekeeper_core::{Note, NoteId, User, UserId};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row for the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub created_on: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::from_uuid(row.id),
            full_name: row.full_name,
            email: row.email,
            password_hash: row.password_hash,
            created_on: row.created_on,
        }
    }
}

/// Database row for the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub is_pinned: bool,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Self {
            id: NoteId::from_uuid(row.id),
            title: row.title,
            content: row.content,
            tags: row.tags,
            is_pinned: row.is_pinned,
            user_id: UserId::from_uuid(row.user_id),
            created_on: row.created_on,
            updated_on: row.updated_on,
        }
    }
}

/// Input for registering a new user. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(full_name: String, email: String, password_hash: String) -> Self {
        Self {
            id: UserId::new(),
            full_name,
            email,
            password_hash,
        }
    }
}

/// Input for creating a new note.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub id: NoteId,
    pub owner: UserId,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl NewNote {
    /// A new unpinned note owned by `owner`.
    pub fn new(owner: UserId, title: String, content: String, tags: Vec<String>) -> Self {
        Self {
            id: NoteId::new(),
            owner,
            title,
            content,
            tags,
        }
    }
}

/// Changes applied to an existing note. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_pinned: Option<bool>,
}

impl NoteChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    pub fn content(mut self, content: String) -> Self {
        self.content = Some(content);
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn pinned(mut self, is_pinned: bool) -> Self {
        self.is_pinned = Some(is_pinned);
        self
    }

    /// Apply these changes to a note in place, bumping `updated_on`.
    pub fn apply_to(&self, note: &mut Note) {
        if let Some(title) = &self.title {
            note.title = title.clone();
        }
        if let Some(content) = &self.content {
            note.content = content.clone();
        }
        if let Some(tags) = &self.tags {
            note.tags = tags.clone();
        }
        if let Some(is_pinned) = self.is_pinned {
            note.is_pinned = is_pinned;
        }
        note.updated_on = Utc::now();
    }
}
