//! Account routes: registration, login and the current user.

use axum::{
    Router,
    extract::State,
    routing::{get, post},
};
use notekeeper_core::{PublicUser, User};
use notekeeper_store::{NewUser, StoreError};
use serde::{Deserialize, Serialize};

use crate::auth;
use crate::envelope::Envelope;
use crate::error::{ApiError, ApiResult};
use crate::extract::{CurrentUser, JsonBody, present};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// A registration request with every field present.
#[derive(Debug)]
pub struct NewAccount {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl CreateAccountRequest {
    pub fn validate(self) -> ApiResult<NewAccount> {
        match (
            present(self.full_name),
            present(self.email),
            present(self.password),
        ) {
            (Some(full_name), Some(email), Some(password)) => Ok(NewAccount {
                full_name,
                email,
                password,
            }),
            _ => Err(ApiError::Validation("All fields are required".to_string())),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// A login request with both credentials present.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(self) -> ApiResult<Credentials> {
        match (present(self.email), present(self.password)) {
            (Some(email), Some(password)) => Ok(Credentials { email, password }),
            _ => Err(ApiError::Validation("All fields are required".to_string())),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredPayload {
    pub user: User,
    pub access_token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPayload {
    pub access_token: String,
}

#[derive(Debug, Serialize)]
pub struct UserPayload {
    pub user: PublicUser,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /create-account
async fn create_account(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateAccountRequest>,
) -> ApiResult<Envelope<RegisteredPayload>> {
    let account = request.validate()?;
    let store = state.store();

    if store.get_user_by_email(&account.email).await?.is_some() {
        return Err(ApiError::Conflict("User already exists".to_string()));
    }

    let password_hash = auth::hash_password(&account.password)?;
    let new_user = NewUser::new(account.full_name, account.email, password_hash);

    let user = store.insert_user(&new_user).await.map_err(|e| match e {
        // Lost a race with a concurrent registration for the same email.
        StoreError::DuplicateEmail(_) => ApiError::Conflict("User already exists".to_string()),
        other => ApiError::Store(other),
    })?;

    let config = state.config();
    let access_token = auth::create_token(&user, &config.jwt_secret, config.jwt_expiry_minutes)?;

    tracing::info!(user_id = %user.id, "Account created");

    Ok(Envelope::success(
        "Registration Successful",
        RegisteredPayload { user, access_token },
    ))
}

/// POST /login
async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> ApiResult<Envelope<TokenPayload>> {
    let credentials = request.validate()?;

    let user = state
        .store()
        .get_user_by_email(&credentials.email)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    if !auth::verify_password(&credentials.password, &user.password_hash)? {
        tracing::debug!(user_id = %user.id, "Login rejected: wrong password");
        return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
    }

    let config = state.config();
    let access_token = auth::create_token(&user, &config.jwt_secret, config.jwt_expiry_minutes)?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Envelope::success(
        "Login Successful",
        TokenPayload { access_token },
    ))
}

/// GET /get-user
async fn get_user(CurrentUser(user): CurrentUser) -> ApiResult<Envelope<UserPayload>> {
    Ok(Envelope::success(
        "User retrieved successfully",
        UserPayload {
            user: user.public(),
        },
    ))
}

/// Build account routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/create-account", post(create_account))
        .route("/login", post(login))
        .route("/get-user", get(get_user))
}
