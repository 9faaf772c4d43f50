//! notekeeper-server: HTTP API for Notekeeper.
//!
//! Users register and log in to receive a bearer token, then create,
//! edit, pin, list, search and delete their own notes. Every response
//! body is an envelope of the form `{"error": bool, "message": ..., ...}`.
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//!
//! Persistence goes through the [`notekeeper_store::NoteBackend`] trait, so
//! the same router runs against PostgreSQL or the in-memory store.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use notekeeper_server::{AppState, ServerConfig, build_app};
//! use notekeeper_store::MemoryStore;
//!
//! let config = ServerConfig::from_env()?;
//! let state = AppState::new(Arc::new(MemoryStore::new()), config);
//! let app = build_app(state)?;
//! ```

pub mod app;
pub mod auth;
pub mod config;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use app::{build_app, build_cors_layer};
pub use config::{ConfigError, ServerConfig, StoreBackend};
pub use envelope::Envelope;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use notekeeper_core;
pub use notekeeper_store;
