//! Application state shared across handlers.

use std::sync::Arc;

use notekeeper_store::NoteBackend;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
/// It is never mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend.
    store: Arc<dyn NoteBackend>,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: Arc<dyn NoteBackend>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Get a reference to the persistence backend.
    pub fn store(&self) -> &dyn NoteBackend {
        self.store.as_ref()
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
