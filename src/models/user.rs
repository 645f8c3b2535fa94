use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Represents a user identity record as owned by the user directory.
///
/// The `id` is immutable once assigned and serves as the stable owner key
/// for exercise records. The email is stored trimmed and lowercased, and the
/// password is stored only as a bcrypt hash, which is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique identifier for the user (UUID v4). Stable for the record's lifetime.
    pub id: Uuid,
    /// The user's email address. Unique, case-normalized to lowercase.
    pub email: String,
    /// Salted one-way hash of the user's password.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Timestamp of when the user registered.
    pub created_at: DateTime<Utc>,
}

/// The serializable view of a user returned by the API (no credentials).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new `User` from an already-normalized email and password hash.
    /// Sets `created_at` to the current time and `id` to a new UUID.
    pub fn new(email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            email: self.email.clone(),
            created_at: self.created_at,
        }
    }
}

/// Normalizes an email address at the boundary: trimmed and lowercased.
/// Applied before every directory lookup or insert so uniqueness is
/// case-insensitive.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
