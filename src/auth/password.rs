use crate::error::AppError;
use bcrypt::{hash, verify};

// bcrypt work factor; the default cost.
const COST: u32 = 12;

/// Hashes a plaintext password with a fresh salt. The plaintext is never
/// stored or logged.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, COST)
        .map_err(|e| AppError::InternalServerError(format!("Failed to hash password: {}", e)))
}

/// Checks a plaintext password against a stored hash.
pub fn verify_password(password: &str, hashed_password: &str) -> Result<bool, AppError> {
    verify(password, hashed_password)
        .map_err(|e| AppError::InternalServerError(format!("Failed to verify password: {}", e)))
}
