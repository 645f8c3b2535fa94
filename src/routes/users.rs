use crate::{
    auth::{generate_token, hash_password, verify_password, AuthResponse, CredentialsRequest},
    error::AppError,
    models::normalize_email,
    store::UserDirectory,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use validator::Validate;

/// Register a new user
///
/// Creates a new user account and returns its public view plus a session token.
/// A duplicate email yields `409 Conflict` and never creates a second record.
#[post("/users")]
pub async fn register(
    users: web::Data<dyn UserDirectory>,
    register_data: web::Json<CredentialsRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    register_data.validate()?;

    let email = normalize_email(&register_data.email);

    // Check if email already exists
    if users.find_by_email(&email).await?.is_some() {
        return Err(AppError::Conflict("email is already registered".into()));
    }

    // Hash password and create the user
    let password_hash = hash_password(&register_data.password)?;
    let user = users.create(&email, &password_hash).await?;

    // Generate token
    let token = generate_token(user.id)?;

    Ok(HttpResponse::Created().json(AuthResponse {
        user: user.summary(),
        token,
    }))
}

/// Login user
///
/// Authenticates an existing user and returns a session token.
#[post("/users/login")]
pub async fn login(
    users: web::Data<dyn UserDirectory>,
    login_data: web::Json<CredentialsRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    login_data.validate()?;

    let email = normalize_email(&login_data.email);

    match users.find_by_email(&email).await? {
        Some(user) => {
            // Verify password
            if verify_password(&login_data.password, &user.password_hash)? {
                let token = generate_token(user.id)?;
                Ok(HttpResponse::Ok().json(AuthResponse {
                    user: user.summary(),
                    token,
                }))
            } else {
                Err(AppError::Unauthorized("Invalid credentials".into()))
            }
        }
        None => Err(AppError::Unauthorized("Invalid credentials".into())),
    }
}

/// List all users
///
/// Returns the public view of every registered user.
#[get("/users")]
pub async fn list_users(
    users: web::Data<dyn UserDirectory>,
) -> Result<impl Responder, AppError> {
    let all_users = users.list().await?;
    Ok(HttpResponse::Ok().json(all_users))
}
