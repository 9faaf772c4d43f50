//! Route definitions for the HTTP API.

pub mod account;
pub mod health;
pub mod notes;

use axum::Router;

use crate::state::AppState;

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(account::routes())
        .merge(notes::routes())
        .with_state(state)
}
