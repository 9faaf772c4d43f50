//! notekeeper-store: Storage layer for Notekeeper
//!
//! This crate provides:
//! - The `NoteBackend` trait the HTTP handlers program against
//! - `Store`, a PostgreSQL backend built on sqlx
//! - `MemoryStore`, an in-process backend for development and tests
//! - Embedded schema migration
//!
//! # Usage
//!
//! ```rust,ignore
//! use notekeeper_store::{NoteBackend, Store, StoreConfig};
//!
//! let config = StoreConfig {
//!     database_url: "postgres://localhost/notekeeper".to_string(),
//!     ..StoreConfig::default()
//! };
//! let store = Store::connect(config).await?;
//!
//! let notes = store.list_notes(user_id).await?;
//! ```

pub mod backend;
pub mod error;
pub mod memory;
pub mod models;
pub mod schema;
pub mod store;

pub use backend::NoteBackend;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use models::*;
pub use store::{Store, StoreConfig};

// Re-export notekeeper-core for downstream crates
pub use notekeeper_core;
