//! sqlx/Postgres implementations of the storage collaborators.
//!
//! Schema (see `sql/schema.sql`): `users(id, email, password_hash, created_at)`
//! with a unique index on `email`, and
//! `exercises(id, user_id, description, duration, date, created_at)`.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{ExerciseRecord, NewExercise, User, UserSummary};
use crate::store::{ExerciseFilter, ExerciseStore, UserDirectory};

#[derive(Clone)]
pub struct PgUserDirectory {
    pool: PgPool,
}

impl PgUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create(&self, email: &str, password_hash: &str) -> Result<User, AppError> {
        let user = User::new(email.to_string(), password_hash.to_string());

        // The unique index on email is the authority on duplicates; a 23505
        // from here surfaces as AppError::Conflict via the From impl.
        let created = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, email, password_hash, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, email, password_hash, created_at",
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn list(&self) -> Result<Vec<UserSummary>, AppError> {
        let users = sqlx::query_as::<_, UserSummary>(
            "SELECT id, email, created_at FROM users ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}

#[derive(Clone)]
pub struct PgExerciseStore {
    pool: PgPool,
}

impl PgExerciseStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExerciseStore for PgExerciseStore {
    async fn insert(&self, record: NewExercise) -> Result<ExerciseRecord, AppError> {
        let record = ExerciseRecord::new(record);

        let created = sqlx::query_as::<_, ExerciseRecord>(
            "INSERT INTO exercises (id, user_id, description, duration, date, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, user_id, description, duration, date, created_at",
        )
        .bind(record.id)
        .bind(record.user_id)
        .bind(&record.description)
        .bind(record.duration)
        .bind(record.date)
        .bind(record.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn find(
        &self,
        filter: &ExerciseFilter,
        limit: i64,
    ) -> Result<Vec<ExerciseRecord>, AppError> {
        // Base query scoped to the owner key; the date-range condition is
        // appended only when the filter carries one.
        let mut sql = String::from(
            "SELECT id, user_id, description, duration, date, created_at \
             FROM exercises WHERE user_id = $1",
        );
        if filter.range.is_some() {
            sql.push_str(" AND date >= $2 AND date <= $3");
            sql.push_str(" ORDER BY created_at LIMIT $4");
        } else {
            sql.push_str(" ORDER BY created_at LIMIT $2");
        }

        let mut query_builder = sqlx::query_as::<_, ExerciseRecord>(&sql);
        query_builder = query_builder.bind(filter.user_id);
        if let Some((from, to)) = filter.range {
            query_builder = query_builder.bind(from).bind(to);
        }
        query_builder = query_builder.bind(limit);

        let records = query_builder.fetch_all(&self.pool).await?;

        Ok(records)
    }
}
