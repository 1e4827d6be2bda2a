//! Tests for the session authentication middleware.

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::Value;
use uuid::Uuid;

use nv_core::services::token::{TokenService, TokenServiceConfig};

use common::{TestContext, TEST_JWT_SECRET};

fn token_service_with(secret: &str, expiry_seconds: i64) -> TokenService {
    TokenService::new(TokenServiceConfig {
        jwt_secret: secret.to_string(),
        token_expiry_seconds: expiry_seconds,
        ..Default::default()
    })
}

#[actix_web::test]
async fn test_missing_token_is_rejected() {
    let ctx = TestContext::new();
    let app = test_app!(ctx);

    let req = test::TestRequest::get().uri("/api/auth/me").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Access denied. No token provided.");
}

#[actix_web::test]
async fn test_malformed_token_is_rejected() {
    let ctx = TestContext::new();
    let app = test_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(("Authorization", "Bearer not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid token.");
}

#[actix_web::test]
async fn test_non_bearer_scheme_is_rejected() {
    let ctx = TestContext::new();
    let app = test_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(("Authorization", "Basic abc123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Access denied. No token provided.");
}

#[actix_web::test]
async fn test_token_for_missing_account_is_rejected() {
    let ctx = TestContext::new();
    let app = test_app!(ctx);

    // Well-signed token, but the subject was never registered
    let token = token_service_with(TEST_JWT_SECRET, 3600)
        .issue(Uuid::new_v4())
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid token. User not found.");
}

#[actix_web::test]
async fn test_expired_token_is_rejected() {
    let ctx = TestContext::new();
    let app = test_app!(ctx);

    // Expired two days ago, far beyond any validation leeway
    let token = token_service_with(TEST_JWT_SECRET, -2 * 86400)
        .issue(Uuid::new_v4())
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid token.");
}

#[actix_web::test]
async fn test_token_signed_with_wrong_secret_is_rejected() {
    let ctx = TestContext::new();
    let app = test_app!(ctx);

    let token = token_service_with("some-other-secret", 3600)
        .issue(Uuid::new_v4())
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
