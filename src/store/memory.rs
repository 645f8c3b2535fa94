//! In-memory implementations of the storage collaborators.
//!
//! Used by unit and integration tests in place of Postgres. Same contracts:
//! email uniqueness, append-only records, insertion-order results.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{ExerciseRecord, NewExercise, User, UserSummary};
use crate::store::{ExerciseFilter, ExerciseStore, UserDirectory};

#[derive(Default)]
pub struct MemoryUserDirectory {
    users: Mutex<Vec<User>>,
}

impl MemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserDirectory for MemoryUserDirectory {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, email: &str, password_hash: &str) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == email) {
            return Err(AppError::Conflict("email is already registered".into()));
        }
        let user = User::new(email.to_string(), password_hash.to_string());
        users.push(user.clone());
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<UserSummary>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().map(User::summary).collect())
    }
}

#[derive(Default)]
pub struct MemoryExerciseStore {
    records: Mutex<Vec<ExerciseRecord>>,
}

impl MemoryExerciseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExerciseStore for MemoryExerciseStore {
    async fn insert(&self, record: NewExercise) -> Result<ExerciseRecord, AppError> {
        let record = ExerciseRecord::new(record);
        let mut records = self.records.lock().unwrap();
        records.push(record.clone());
        Ok(record)
    }

    async fn find(
        &self,
        filter: &ExerciseFilter,
        limit: i64,
    ) -> Result<Vec<ExerciseRecord>, AppError> {
        let records = self.records.lock().unwrap();
        let matches = records
            .iter()
            .filter(|r| r.user_id == filter.user_id)
            .filter(|r| match filter.range {
                Some((from, to)) => r.date >= from && r.date <= to,
                None => true,
            })
            .take(limit.max(0) as usize)
            .cloned()
            .collect();
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[actix_rt::test]
    async fn test_directory_rejects_duplicate_email() {
        let directory = MemoryUserDirectory::new();
        directory.create("jane@example.com", "hash").await.unwrap();

        let err = directory
            .create("jane@example.com", "other-hash")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(directory.list().await.unwrap().len(), 1);
    }

    #[actix_rt::test]
    async fn test_find_respects_range_and_limit() {
        let store = MemoryExerciseStore::new();
        let user_id = Uuid::new_v4();
        for day in 1..=10 {
            store
                .insert(NewExercise {
                    user_id,
                    description: format!("run {}", day),
                    duration: 30.0,
                    date: date(2024, 1, day),
                })
                .await
                .unwrap();
        }

        let filter = ExerciseFilter {
            user_id,
            range: Some((date(2024, 1, 3), date(2024, 1, 7))),
        };
        let matches = store.find(&filter, 9999).await.unwrap();
        assert_eq!(matches.len(), 5);
        assert_eq!(matches[0].description, "run 3");

        let limited = store.find(&filter, 2).await.unwrap();
        assert_eq!(limited.len(), 2);
    }

    #[actix_rt::test]
    async fn test_find_ignores_other_owners() {
        let store = MemoryExerciseStore::new();
        let owner = Uuid::new_v4();
        store
            .insert(NewExercise {
                user_id: Uuid::new_v4(),
                description: "someone else".into(),
                duration: 10.0,
                date: date(2024, 1, 1),
            })
            .await
            .unwrap();

        let filter = ExerciseFilter {
            user_id: owner,
            range: None,
        };
        assert!(store.find(&filter, 9999).await.unwrap().is_empty());
    }
}
