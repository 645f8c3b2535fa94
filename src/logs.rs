//! The exercise-log query service.
//!
//! Given a user identifier and optional filters, resolves the owning user
//! through the user directory, builds a storage filter, executes it against
//! the exercise store, and reshapes the raw records into a log summary.
//! Read-only apart from `record_exercise`'s single insert; storage failures
//! propagate to the caller without retry.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;
use crate::models::{ExerciseInput, ExerciseLog, ExerciseRecord, LogEntry, LogQuery, NewExercise};
use crate::store::{ExerciseFilter, ExerciseStore, UserDirectory};

/// Result-set cap applied when `limit` is absent or unparsable. Large enough
/// to preserve "return everything in practice" semantics.
pub const DEFAULT_LOG_LIMIT: i64 = 9999;

/// Produces log summaries and records exercises for resolved users.
///
/// Storage collaborators are injected so tests can substitute the in-memory
/// implementations from `store::memory`.
#[derive(Clone)]
pub struct LogService {
    users: Arc<dyn UserDirectory>,
    exercises: Arc<dyn ExerciseStore>,
}

impl LogService {
    pub fn new(users: Arc<dyn UserDirectory>, exercises: Arc<dyn ExerciseStore>) -> Self {
        Self { users, exercises }
    }

    /// Builds the log summary for `user_id`, applying the optional date-range
    /// and result-count constraints from `query`.
    ///
    /// An unknown user yields `AppError::NotFound`. A present-but-malformed
    /// `from` or `to` yields `AppError::BadRequest`; a range with
    /// `from > to` matches nothing rather than erroring. Results are in
    /// insertion order, and `log` is `[]` when nothing matches.
    pub async fn log_for_user(
        &self,
        user_id: Uuid,
        query: &LogQuery,
    ) -> Result<ExerciseLog, AppError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))?;

        let filter = ExerciseFilter {
            user_id: user.id,
            range: date_range(query)?,
        };
        let limit = parse_limit(query.limit.as_deref());

        let records = self.exercises.find(&filter, limit).await?;
        let entries: Vec<LogEntry> = records.into_iter().map(LogEntry::from).collect();

        Ok(ExerciseLog {
            email: user.email,
            count: entries.len(),
            id: user_id,
            log: entries,
        })
    }

    /// Appends one exercise record for `user_id` and returns it.
    ///
    /// The input is validated first (non-empty description, finite
    /// non-negative duration), then the user is resolved; an unknown user
    /// yields `AppError::NotFound`. A missing date defaults to the current
    /// UTC calendar date.
    pub async fn record_exercise(
        &self,
        user_id: Uuid,
        input: ExerciseInput,
    ) -> Result<ExerciseRecord, AppError> {
        input.validate()?;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))?;

        let record = NewExercise {
            user_id: user.id,
            description: input.description,
            duration: input.duration,
            date: input.date.unwrap_or_else(|| Utc::now().date_naive()),
        };

        self.exercises.insert(record).await
    }
}

/// Parses a `YYYY-MM-DD` query value. Unlike the limit, a date that is
/// present but malformed is an error, not a silent fallback.
fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("{} must be a YYYY-MM-DD date", field)))
}

/// Both dates must be present together to activate range filtering;
/// asymmetric presence is ignored rather than rejected.
fn date_range(query: &LogQuery) -> Result<Option<(NaiveDate, NaiveDate)>, AppError> {
    match (query.from.as_deref(), query.to.as_deref()) {
        (Some(from), Some(to)) => Ok(Some((
            parse_date("from", from)?,
            parse_date("to", to)?,
        ))),
        _ => Ok(None),
    }
}

/// Lenient limit parsing: absent, unparsable, or negative values fall back
/// to `DEFAULT_LOG_LIMIT` rather than erroring.
fn parse_limit(limit: Option<&str>) -> i64 {
    limit
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|n| *n >= 0)
        .unwrap_or(DEFAULT_LOG_LIMIT)
}
