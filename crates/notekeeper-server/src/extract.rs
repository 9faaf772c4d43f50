//! Request extractors: the authenticated caller and JSON bodies.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use notekeeper_core::User;
use serde::de::DeserializeOwned;

use crate::auth::validate_token;
use crate::error::ApiError;
use crate::state::AppState;

/// The caller, resolved from `Authorization: Bearer <jwt>`.
///
/// The user record is re-fetched from the store on every request, so a
/// token whose user no longer exists is rejected with 401.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    if rejection.is_missing() {
                        ApiError::Unauthenticated("Missing Authorization header".to_string())
                    } else {
                        ApiError::Unauthenticated(
                            "Authorization header must be Bearer <token>".to_string(),
                        )
                    }
                })?;

        let claims = validate_token(bearer.token(), &state.config().jwt_secret)?;

        let user = state
            .store()
            .get_user(claims.user_id())
            .await?
            .ok_or_else(|| {
                tracing::warn!(user_id = %claims.sub, "Token subject no longer exists");
                ApiError::Unauthenticated("User no longer exists".to_string())
            })?;

        Ok(CurrentUser(user))
    }
}

/// `Json<T>` whose rejection is rendered as a 400 envelope.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Rejected request body");
                Err(ApiError::Validation(rejection.body_text()))
            }
        }
    }
}

/// `Query<T>` whose rejection is rendered as a 400 envelope.
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Rejected query string");
                Err(ApiError::Validation(rejection.body_text()))
            }
        }
    }
}

/// `Path<T>` whose rejection is rendered as a 400 envelope.
#[derive(Debug, Clone)]
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Rejected path parameters");
                Err(ApiError::Validation(rejection.body_text()))
            }
        }
    }
}

/// An absent field and an empty string both count as missing.
pub fn present(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}
