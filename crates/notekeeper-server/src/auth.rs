//! Authentication module: JWT token management and password hashing.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use notekeeper_core::{User, UserId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

/// JWT claims.
///
/// Carries the user's id and the email it was issued for; handlers re-read
/// the user record on every request instead of trusting the token's copy.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID (subject).
    pub sub: Uuid,
    /// Email at issue time, informational only.
    pub email: String,
    /// Expiration time (unix timestamp).
    pub exp: usize,
    /// Issued at (unix timestamp).
    pub iat: usize,
}

impl Claims {
    /// The user this token was issued to.
    pub fn user_id(&self) -> UserId {
        UserId::from_uuid(self.sub)
    }
}

/// Create a JWT token for a user.
pub fn create_token(user: &User, secret: &str, expiry_minutes: u64) -> Result<String, ApiError> {
    let now = chrono::Utc::now();
    let lifetime = i64::try_from(expiry_minutes)
        .ok()
        .and_then(chrono::TimeDelta::try_minutes)
        .ok_or_else(|| {
            ApiError::Internal(format!("Token lifetime out of range: {} minutes", expiry_minutes))
        })?;
    let exp = now
        .checked_add_signed(lifetime)
        .ok_or_else(|| {
            ApiError::Internal(format!("Token expiry out of range: {} minutes", expiry_minutes))
        })?
        .timestamp() as usize;

    let claims = Claims {
        sub: *user.id.as_uuid(),
        email: user.email.clone(),
        exp,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(format!("Failed to create token: {}", e)))
}

/// Validate a JWT token and return claims.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, ApiError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| {
        tracing::debug!(error = %e, "Token validation failed");
        ApiError::Forbidden("Invalid or expired token".to_string())
    })?;

    Ok(token_data.claims)
}

/// Hash a password using Argon2.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ApiError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(password_hash.to_string())
}

/// Verify a password against a hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| ApiError::Internal(format!("Invalid password hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
