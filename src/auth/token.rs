use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the claims encoded within a JWT (JSON Web Token).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token: the user's unique identifier.
    pub sub: Uuid,
    /// Expiration timestamp (seconds since epoch) for the token.
    pub exp: usize,
}

/// Generates a JWT for a given user ID.
///
/// The token is set to expire in 24 hours.
/// It requires the `JWT_SECRET` environment variable to be set for signing the token.
///
/// # Arguments
/// * `user_id` - The ID of the user for whom the token is generated.
///
/// # Returns
/// A `Result` containing the JWT string if successful.
/// Returns `AppError::InternalServerError` if `JWT_SECRET` is not set or if token encoding fails.
pub fn generate_token(user_id: Uuid) -> Result<String, AppError> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::hours(24))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id,
        exp: expiration,
    };

    let secret = std::env::var("JWT_SECRET")
        .map_err(|_| AppError::InternalServerError("JWT_SECRET not set".into()))?;

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))
}

/// Verifies a JWT string and decodes its claims.
///
/// It requires the `JWT_SECRET` environment variable to be set for verifying the token signature.
/// Default validation checks are applied (e.g., signature, expiration).
///
/// # Arguments
/// * `token` - The JWT string to verify.
///
/// # Returns
/// A `Result` containing the decoded `Claims` if the token is valid.
/// Returns `AppError::InternalServerError` if `JWT_SECRET` is not set.
/// Returns `AppError::Unauthorized` if the token is malformed, its signature is invalid, or it has expired.
pub fn verify_token(token: &str) -> Result<Claims, AppError> {
    let secret = std::env::var("JWT_SECRET")
        .map_err(|_| AppError::InternalServerError("JWT_SECRET not set".into()))?;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
}
