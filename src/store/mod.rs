//! Storage collaborators.
//!
//! The log service never owns storage; it reads and composes through these
//! two traits. Handlers and tests inject implementations explicitly
//! (`postgres` in production, `memory` in tests) instead of reaching for a
//! process-wide connection.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{ExerciseRecord, NewExercise, User, UserSummary};

pub use memory::{MemoryExerciseStore, MemoryUserDirectory};
pub use postgres::{PgExerciseStore, PgUserDirectory};

/// Filter for an exercise query: owner plus an optional inclusive date range.
///
/// The owner key is the user's immutable id, resolved through the user
/// directory before the store is ever queried. When `range` is `None` no
/// date constraint applies.
#[derive(Debug, Clone)]
pub struct ExerciseFilter {
    pub user_id: Uuid,
    pub range: Option<(NaiveDate, NaiveDate)>,
}

/// The user directory: a key-value-like store keyed by user id or email.
/// Owns `User` records exclusively; enforces email uniqueness.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Creates a user from an already-normalized email and password hash.
    /// A duplicate email yields `AppError::Conflict` and never a second record.
    async fn create(&self, email: &str, password_hash: &str) -> Result<User, AppError>;

    async fn list(&self) -> Result<Vec<UserSummary>, AppError>;
}

/// The exercise store: an append-mostly record store queried by owner and
/// date range. Records are immutable once inserted.
#[async_trait]
pub trait ExerciseStore: Send + Sync {
    async fn insert(&self, record: NewExercise) -> Result<ExerciseRecord, AppError>;

    /// Returns at most `limit` matching records, in insertion order.
    async fn find(
        &self,
        filter: &ExerciseFilter,
        limit: i64,
    ) -> Result<Vec<ExerciseRecord>, AppError>;
}
