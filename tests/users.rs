use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{test, web, App};
use serde_json::json;

use exerlog::logs::LogService;
use exerlog::routes;
use exerlog::routes::health;
use exerlog::store::{ExerciseStore, MemoryExerciseStore, MemoryUserDirectory, UserDirectory};

fn test_state() -> (web::Data<dyn UserDirectory>, web::Data<LogService>) {
    std::env::set_var("JWT_SECRET", "integration_test_secret");
    let users: Arc<dyn UserDirectory> = Arc::new(MemoryUserDirectory::new());
    let exercises: Arc<dyn ExerciseStore> = Arc::new(MemoryExerciseStore::new());
    let logs = LogService::new(users.clone(), exercises);
    (web::Data::from(users), web::Data::new(logs))
}

#[actix_rt::test]
async fn test_register_and_login_flow() {
    let (users_data, logs_data) = test_state();

    // Inline App setup
    let app = test::init_service(
        App::new()
            .app_data(users_data)
            .app_data(logs_data)
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(health::health)
            .configure(routes::config),
    )
    .await;

    // Register a new user; email should be normalized to lowercase.
    let register_payload = json!({
        "email": "  Integration@Example.COM ",
        "password": "Password123!"
    });
    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(&register_payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body_bytes = test::read_body(resp).await;
    assert_eq!(
        status,
        actix_web::http::StatusCode::CREATED,
        "Registration failed. Body: {:?}",
        String::from_utf8_lossy(&body_bytes)
    );
    let auth_response: exerlog::auth::AuthResponse =
        serde_json::from_slice(&body_bytes).expect("Failed to parse registration response");
    assert_eq!(auth_response.user.email, "integration@example.com");
    assert!(!auth_response.token.is_empty());

    // Registering the same email again must conflict and never create a second record.
    let req_conflict = test::TestRequest::post()
        .uri("/api/users")
        .set_json(&json!({
            "email": "integration@example.com",
            "password": "AnotherPassword1"
        }))
        .to_request();
    let resp_conflict = test::call_service(&app, req_conflict).await;
    assert_eq!(resp_conflict.status(), actix_web::http::StatusCode::CONFLICT);

    // Login with the right password succeeds.
    let req_login = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(&json!({
            "email": "integration@example.com",
            "password": "Password123!"
        }))
        .to_request();
    let resp_login = test::call_service(&app, req_login).await;
    assert_eq!(resp_login.status(), actix_web::http::StatusCode::OK);
    let login_body: exerlog::auth::AuthResponse =
        serde_json::from_slice(&test::read_body(resp_login).await).unwrap();
    assert_eq!(login_body.user.id, auth_response.user.id);

    // Login with the wrong password is unauthorized.
    let req_bad_login = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(&json!({
            "email": "integration@example.com",
            "password": "WrongPassword1"
        }))
        .to_request();
    let resp_bad_login = test::call_service(&app, req_bad_login).await;
    assert_eq!(
        resp_bad_login.status(),
        actix_web::http::StatusCode::UNAUTHORIZED
    );

    // The user list contains exactly the one registered user, without credentials.
    let req_list = test::TestRequest::get().uri("/api/users").to_request();
    let resp_list = test::call_service(&app, req_list).await;
    assert_eq!(resp_list.status(), actix_web::http::StatusCode::OK);
    let listed: serde_json::Value =
        serde_json::from_slice(&test::read_body(resp_list).await).unwrap();
    let listed = listed.as_array().expect("user list should be an array");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["email"], "integration@example.com");
    assert!(listed[0].get("password_hash").is_none());
}

#[actix_rt::test]
async fn test_register_validation_reports_all_fields() {
    let (users_data, logs_data) = test_state();

    let app = test::init_service(
        App::new()
            .app_data(users_data)
            .app_data(logs_data)
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(&json!({
            "email": "not-an-email",
            "password": "short"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.status(),
        actix_web::http::StatusCode::UNPROCESSABLE_ENTITY
    );

    let body: serde_json::Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
    assert_eq!(body["errors"]["email"], "Invalid email");
    assert_eq!(
        body["errors"]["password"],
        "Minimum password length is 8 characters"
    );
}
