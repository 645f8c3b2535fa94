use crate::{
    error::AppError,
    logs::LogService,
    models::{ExerciseInput, LogQuery},
};
use actix_web::{get, post, web, HttpResponse, Responder};
use uuid::Uuid;

/// Parses the `{id}` path segment. A value that is not a valid UUID is a
/// client error, reported with the application's JSON error body rather
/// than the framework default.
fn parse_user_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest("Invalid user id".into()))
}

/// Records an exercise against a user.
///
/// ## Path Parameters:
/// - `id`: The UUID of the owning user.
///
/// ## Request Body:
/// A JSON object matching `ExerciseInput`:
/// - `description`: Free-text description of the activity (required, non-empty).
/// - `duration`: Duration in minutes (required, finite and non-negative).
/// - `date` (optional): Occurrence date as `YYYY-MM-DD`; defaults to today (UTC).
///
/// ## Responses:
/// - `201 Created`: Returns the newly created exercise record as JSON.
/// - `400 Bad Request`: If the user id is not a valid UUID.
/// - `404 Not Found`: If the user does not exist.
/// - `422 Unprocessable Entity`: If input validation fails, with per-field messages.
/// - `500 Internal Server Error`: For storage errors.
#[post("/users/{id}/exercises")]
pub async fn record_exercise(
    logs: web::Data<LogService>,
    user_id: web::Path<String>,
    exercise_data: web::Json<ExerciseInput>,
) -> Result<impl Responder, AppError> {
    let user_id = parse_user_id(&user_id)?;

    let record = logs
        .record_exercise(user_id, exercise_data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(record))
}

/// Returns a user's exercise log, optionally filtered and limited.
///
/// ## Path Parameters:
/// - `id`: The UUID of the user whose log is requested.
///
/// ## Query Parameters:
/// - `from`, `to` (optional): `YYYY-MM-DD` calendar dates. Both must be present
///   together to activate range filtering (inclusive on both ends); a single
///   one is ignored.
/// - `limit` (optional): Maximum number of entries. Unparsable or negative
///   values fall back to the default cap.
///
/// ## Responses:
/// - `200 OK`: `{email, count, _id, log: [{description, duration, date}]}`.
///   `log` is `[]` when nothing matches.
/// - `400 Bad Request`: If the user id or a supplied date is malformed.
/// - `404 Not Found`: If the user does not exist.
/// - `500 Internal Server Error`: For storage errors.
#[get("/users/{id}/logs")]
pub async fn get_log(
    logs: web::Data<LogService>,
    user_id: web::Path<String>,
    query: web::Query<LogQuery>,
) -> Result<impl Responder, AppError> {
    let user_id = parse_user_id(&user_id)?;

    let log = logs.log_for_user(user_id, &query).await?;

    Ok(HttpResponse::Ok().json(log))
}
