//! Router assembly: routes plus the middleware stack.

use axum::{Router, middleware};
use http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;
use crate::middleware::request_id::{propagate_request_id, request_id_layer};
use crate::routes;
use crate::state::AppState;

/// Build the full application: routes, request IDs, CORS and tracing.
pub fn build_app(state: AppState) -> Result<Router, ConfigError> {
    let cors = build_cors_layer(&state.config().cors_allowed_origins)?;

    Ok(routes::build_router(state)
        .layer(middleware::from_fn(propagate_request_id))
        .layer(request_id_layer())
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

/// Build CORS layer from a comma-separated origin list, or `*` for any.
pub fn build_cors_layer(allowed_origins: &str) -> Result<CorsLayer, ConfigError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.trim() == "*" {
        return Ok(layer.allow_origin(Any));
    }

    let origins = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidValue {
                name: "CORS_ALLOWED_ORIGINS".to_string(),
                reason: format!("{}: {}", origin, e),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(layer.allow_origin(origins))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_origins() {
        assert!(build_cors_layer("*").is_ok());
        assert!(build_cors_layer("http://localhost:5173, https://notes.example.com").is_ok());
        assert!(build_cors_layer("http://bad\norigin").is_err());
    }
}
