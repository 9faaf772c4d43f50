//! notekeeper-core: domain types shared by the Notekeeper server, store and CLI.
//!
//! This crate provides:
//! - Typed identifiers (`UserId`, `NoteId`)
//! - The `User` and `Note` records with their wire (JSON) shapes
//! - `SearchQuery`, a case-insensitive literal substring matcher
//! - Pinned-first ordering for note listings
//!
//! Nothing in here performs I/O.

pub mod order;
pub mod search;
pub mod types;

pub use order::{is_pinned_first, sort_pinned_first};
pub use search::{SearchQuery, SearchQueryError, escape_pattern};
pub use types::{Note, NoteId, PublicUser, User, UserId};
