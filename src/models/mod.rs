pub mod exercise;
pub mod user;

pub use exercise::{ExerciseInput, ExerciseLog, ExerciseRecord, LogEntry, LogQuery, NewExercise};
pub use user::{normalize_email, User, UserSummary};
