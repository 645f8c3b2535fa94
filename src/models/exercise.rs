use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Input structure for logging an exercise against a user.
/// Contains validation rules for its fields.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ExerciseInput {
    /// Free-text description of the activity.
    /// Must be non-empty, at most 500 characters.
    #[validate(length(min = 1, max = 500, message = "Please enter a description"))]
    pub description: String,

    /// Duration in minutes. Must be a finite, non-negative number.
    #[validate(custom = "validate_duration")]
    pub duration: f64,

    /// Optional occurrence date (`YYYY-MM-DD`). Defaults to the current UTC
    /// date at call time when absent. Time-of-day is never recorded.
    pub date: Option<NaiveDate>,
}

/// Rejects non-finite and negative durations at the boundary so invalid
/// numeric state is never persisted.
fn validate_duration(duration: f64) -> Result<(), ValidationError> {
    if !duration.is_finite() {
        let mut err = ValidationError::new("duration_not_finite");
        err.message = Some("Duration must be a finite number".into());
        return Err(err);
    }
    if duration < 0.0 {
        let mut err = ValidationError::new("duration_negative");
        err.message = Some("Duration must be non-negative".into());
        return Err(err);
    }
    Ok(())
}

/// An exercise record ready for insertion: owner key plus normalized fields.
#[derive(Debug, Clone)]
pub struct NewExercise {
    /// The owning user's immutable id.
    pub user_id: Uuid,
    pub description: String,
    pub duration: f64,
    /// Canonical UTC calendar date, already defaulted when the input omitted it.
    pub date: NaiveDate,
}

/// One logged activity, as stored and as returned by the record endpoint.
/// Records are append-only; they are never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExerciseRecord {
    /// Unique identifier for the record (UUID v4).
    pub id: Uuid,
    /// Owner reference: the user's immutable id.
    pub user_id: Uuid,
    /// Free-text description of the activity.
    pub description: String,
    /// Duration in minutes.
    pub duration: f64,
    /// Occurrence date. Calendar date only, no time-of-day semantics.
    pub date: NaiveDate,
    /// Insertion timestamp; log queries return records in insertion order.
    pub created_at: DateTime<Utc>,
}

impl ExerciseRecord {
    /// Creates a new `ExerciseRecord` from a `NewExercise`.
    /// Sets `created_at` to the current time and `id` to a new UUID.
    pub fn new(input: NewExercise) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: input.user_id,
            description: input.description,
            duration: input.duration,
            date: input.date,
            created_at: Utc::now(),
        }
    }
}

/// Raw query parameters for a log request. `from`/`to` are `YYYY-MM-DD`
/// strings and `limit` a non-negative integer; all optional. Parsing and
/// defaulting happen in the log service, not at deserialization time.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// A simplified exercise entry inside a log summary. The owner key is
/// dropped from each entry; the owner appears once at the top level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: f64,
    pub date: NaiveDate,
}

impl From<ExerciseRecord> for LogEntry {
    fn from(record: ExerciseRecord) -> Self {
        Self {
            description: record.description,
            duration: record.duration,
            date: record.date,
        }
    }
}

/// The derived log summary returned by a log query. Computed fresh per
/// request, never persisted. `count` always equals `log.len()` and `log`
/// is `[]`, never null, when nothing matches.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseLog {
    /// The owner's email address.
    pub email: String,
    /// Number of matching records after filtering and limiting.
    pub count: usize,
    /// Echo of the queried user id.
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Matching entries in insertion order.
    pub log: Vec<LogEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(description: &str, duration: f64) -> ExerciseInput {
        ExerciseInput {
            description: description.to_string(),
            duration,
            date: None,
        }
    }

    #[test]
    fn test_exercise_input_validation() {
        assert!(input("morning run", 30.0).validate().is_ok());
        assert!(input("", 30.0).validate().is_err(), "empty description");
        assert!(input("run", -5.0).validate().is_err(), "negative duration");
        assert!(
            input("run", f64::NAN).validate().is_err(),
            "NaN duration must not pass through"
        );
        assert!(
            input("run", f64::INFINITY).validate().is_err(),
            "non-finite duration"
        );
        assert!(input("run", 0.0).validate().is_ok(), "zero is allowed");
    }

    #[test]
    fn test_record_creation_keeps_owner_key() {
        let user_id = Uuid::new_v4();
        let record = ExerciseRecord::new(NewExercise {
            user_id,
            description: "swim".into(),
            duration: 45.0,
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        });
        assert_eq!(record.user_id, user_id);
        assert_eq!(record.duration, 45.0);
    }

    #[test]
    fn test_log_serializes_with_mongo_style_id_field() {
        let log = ExerciseLog {
            email: "jane@example.com".into(),
            count: 0,
            id: Uuid::nil(),
            log: vec![],
        };
        let json = serde_json::to_value(&log).unwrap();
        assert!(json.get("_id").is_some());
        assert_eq!(json["log"], serde_json::json!([]));
    }

    #[test]
    fn test_log_entry_drops_owner_key() {
        let record = ExerciseRecord::new(NewExercise {
            user_id: Uuid::new_v4(),
            description: "row".into(),
            duration: 20.0,
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        });
        let entry = LogEntry::from(record);
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("user_id").is_none());
        assert_eq!(json["date"], "2024-02-01");
    }
}
