//! Tests for the ownership-scoped notes endpoints.

mod common;

use actix_web::{
    http::StatusCode,
    test::{self, TestRequest},
};
use serde_json::{json, Value};

use common::TestContext;

/// Sign up a fresh user through the API and return their token.
async fn signup<S, B>(app: &S, ctx: &TestContext, email: &str) -> String
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: actix_web::body::MessageBody,
{
    ctx.plant_otp(email, "123456").await;
    let req = TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(json!({
            "name": "Note Writer",
            "email": email,
            "dateOfBirth": "1990-01-01",
            "otp": "123456",
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    body["token"].as_str().unwrap().to_string()
}

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

#[actix_web::test]
async fn test_notes_crud_round_trip() {
    let ctx = TestContext::new();
    let app = test_app!(ctx);
    let token = signup(&app, &ctx, "writer@x.com").await;

    // Starts empty, and `notes` is an array
    let req = TestRequest::get()
        .uri("/api/notes")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["notes"].as_array().unwrap().is_empty());

    // Create
    let req = TestRequest::post()
        .uri("/api/notes")
        .insert_header(bearer(&token))
        .set_json(json!({"title": "Groceries", "content": "Milk, eggs"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Note created successfully");
    let note_id = body["note"]["id"].as_str().unwrap().to_string();

    // Read back
    let req = TestRequest::get()
        .uri(&format!("/api/notes/{}", note_id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["note"]["title"], "Groceries");

    // Update
    let req = TestRequest::put()
        .uri(&format!("/api/notes/{}", note_id))
        .insert_header(bearer(&token))
        .set_json(json!({"title": "Groceries", "content": "Milk, eggs, coffee"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Note updated successfully");
    assert_eq!(body["note"]["content"], "Milk, eggs, coffee");

    // Delete, then the note is gone
    let req = TestRequest::delete()
        .uri(&format!("/api/notes/{}", note_id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = TestRequest::get()
        .uri(&format!("/api/notes/{}", note_id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Note not found");
}

#[actix_web::test]
async fn test_notes_are_scoped_to_their_owner() {
    let ctx = TestContext::new();
    let app = test_app!(ctx);

    let alice = signup(&app, &ctx, "alice@x.com").await;
    let bob = signup(&app, &ctx, "bob@x.com").await;

    let req = TestRequest::post()
        .uri("/api/notes")
        .insert_header(bearer(&alice))
        .set_json(json!({"title": "Private", "content": "Alice only"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let note_id = body["note"]["id"].as_str().unwrap().to_string();

    // Bob cannot see, update, or delete Alice's note; the note is
    // indistinguishable from a missing one
    for req in [
        TestRequest::get()
            .uri(&format!("/api/notes/{}", note_id))
            .insert_header(bearer(&bob))
            .to_request(),
        TestRequest::put()
            .uri(&format!("/api/notes/{}", note_id))
            .insert_header(bearer(&bob))
            .set_json(json!({"title": "x", "content": "y"}))
            .to_request(),
        TestRequest::delete()
            .uri(&format!("/api/notes/{}", note_id))
            .insert_header(bearer(&bob))
            .to_request(),
    ] {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    // Bob's listing does not include it
    let req = TestRequest::get()
        .uri("/api/notes")
        .insert_header(bearer(&bob))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert!(body["notes"].as_array().unwrap().is_empty());

    // Alice still sees her note
    let req = TestRequest::get()
        .uri("/api/notes")
        .insert_header(bearer(&alice))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["notes"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_notes_require_authentication() {
    let ctx = TestContext::new();
    let app = test_app!(ctx);

    let req = TestRequest::get().uri("/api/notes").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_note_validation_and_bad_ids() {
    let ctx = TestContext::new();
    let app = test_app!(ctx);
    let token = signup(&app, &ctx, "writer@x.com").await;

    let req = TestRequest::post()
        .uri("/api/notes")
        .insert_header(bearer(&token))
        .set_json(json!({"title": "", "content": "body"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Note title is required");

    let req = TestRequest::post()
        .uri("/api/notes")
        .insert_header(bearer(&token))
        .set_json(json!({"title": "title", "content": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Note content is required");

    let req = TestRequest::get()
        .uri("/api/notes/not-a-uuid")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid note ID");
}
