//! Core data types for Notekeeper.
//!
//! The JSON field names (`_id`, `fullName`, `isPinned`, ...) are the ones
//! existing clients already consume, so they are fixed by serde attributes
//! rather than by the Rust field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a registered user.
///
/// Wraps a UUID v4 so user ids cannot be confused with note ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Creates a new random UserId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a UserId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Unique identifier for a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub Uuid);

impl NoteId {
    /// Creates a new random NoteId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a NoteId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

// ============================================================================
// Users
// ============================================================================

/// A registered account.
///
/// The password hash never leaves the server: it is skipped on
/// serialization and left empty on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    #[serde(skip)]
    pub password_hash: String,
    pub created_on: DateTime<Utc>,
}

impl User {
    /// Reduced projection safe to hand back to the caller.
    #[must_use]
    pub fn public(&self) -> PublicUser {
        PublicUser {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            id: self.id,
        }
    }
}

/// The `{fullName, email, _id}` projection returned by `GET /get-user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub full_name: String,
    pub email: String,
    #[serde(rename = "_id")]
    pub id: UserId,
}

// ============================================================================
// Notes
// ============================================================================

/// A note owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Tags in the order the owner supplied them.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_pinned: bool,
    pub user_id: UserId,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

impl Note {
    /// Whether this note belongs to `owner`.
    #[must_use]
    pub fn is_owned_by(&self, owner: UserId) -> bool {
        self.user_id == owner
    }
}
