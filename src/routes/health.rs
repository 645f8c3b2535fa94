use actix_web::{get, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>exerlog</title></head>
  <body>
    <h1>exerlog</h1>
    <p>Exercise tracking API. POST credentials to <code>/api/users</code> to get started.</p>
  </body>
</html>
"#;

/// Landing document served at the root path.
#[get("/")]
pub async fn landing() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(LANDING_PAGE)
}

/// Health check endpoint
///
/// Returns the current status of the API and timestamp.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "timestamp": Utc::now()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(actix_web::App::new().service(health)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["status"], "ok");
        assert!(json["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_landing_page_is_html() {
        let app = test::init_service(actix_web::App::new().service(landing)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"));
    }
}
