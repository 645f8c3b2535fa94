pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::UserSummary;

// Re-export necessary items
pub use password::{hash_password, verify_password};
pub use token::{generate_token, verify_token, Claims};

/// Represents the payload for registration and login requests.
/// The same credential shape serves both endpoints.
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsRequest {
    /// User's email address.
    /// Must be a valid email format.
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    /// User's password.
    /// Must be at least 8 characters long.
    #[validate(length(min = 8, message = "Minimum password length is 8 characters"))]
    pub password: String,
}

/// Response structure after successful registration or login.
/// Contains the user's public view and a signed session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The authenticated user, without credentials.
    pub user: UserSummary,
    /// The JWT (JSON Web Token) for session authentication.
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_credentials_validation() {
        let valid = CredentialsRequest {
            email: "test@example.com".to_string(),
            password: "password123".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid_email = CredentialsRequest {
            email: "testexample.com".to_string(),
            password: "password123".to_string(),
        };
        assert!(invalid_email.validate().is_err());

        let short_password = CredentialsRequest {
            email: "test@example.com".to_string(),
            password: "short".to_string(),
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_validation_reports_both_fields_at_once() {
        let both_invalid = CredentialsRequest {
            email: "nope".to_string(),
            password: "nope".to_string(),
        };
        let errors = both_invalid.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }
}
