//! The `{error, message, ...payload}` wrapper every response uses.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Payload for responses that carry nothing beyond the envelope.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Empty {}

/// JSON response envelope. Payload fields are flattened next to
/// `error` and `message`.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize = Empty> {
    pub error: bool,
    pub message: String,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> Envelope<T> {
    /// A successful response carrying `payload`.
    pub fn success(message: impl Into<String>, payload: T) -> Self {
        Self {
            error: false,
            message: message.into(),
            payload,
        }
    }
}

impl Envelope<Empty> {
    /// A successful response with no payload.
    pub fn ack(message: impl Into<String>) -> Self {
        Self::success(message, Empty {})
    }

    /// A failed response.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
            payload: Empty {},
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
