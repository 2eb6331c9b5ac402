use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    middleware::from_fn,
    routing::post,
    Router,
};
use tower::ServiceExt;

use crate::middleware::payload::{validate_client_payload, ExpectedPayload};

const SUBMIT_PAYLOAD: ExpectedPayload =
    ExpectedPayload::with_optional(&["email", "username"], &["mobileNumber"]);

/// Builds a single-route router guarded by the payload validator, counting
/// how often the inner handler actually runs.
fn test_router(handler_calls: Arc<AtomicUsize>) -> Router {
    Router::new().route(
        "/submit",
        post(move || {
            let calls = handler_calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                "handled"
            }
        })
        .route_layer(from_fn(|request, next| {
            validate_client_payload(SUBMIT_PAYLOAD, request, next)
        })),
    )
}

fn json_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/submit")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Tests that a request missing required fields is rejected.
///
/// Verifies the validator returns 400 listing exactly the missing required
/// field names and that the inner handler is never invoked.
#[tokio::test]
async fn rejects_missing_required_fields_without_invoking_handler() {
    let handler_calls = Arc::new(AtomicUsize::new(0));
    let router = test_router(handler_calls.clone());

    let response = router
        .oneshot(json_request(r#"{"email":"jane@example.com"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["body"], "Missing Data: username.");
    assert_eq!(handler_calls.load(Ordering::SeqCst), 0);
}

/// Tests that all missing required fields are listed together.
#[tokio::test]
async fn lists_every_missing_required_field() {
    let handler_calls = Arc::new(AtomicUsize::new(0));
    let router = test_router(handler_calls.clone());

    let response = router.oneshot(json_request(r#"{}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["body"], "Missing Data: email, username.");
    assert_eq!(handler_calls.load(Ordering::SeqCst), 0);
}

/// Tests the declared-optional-but-absent case.
///
/// Declared optional fields are validated exactly like required ones: a
/// request satisfying every required field but missing an optional one is
/// still rejected with a 400 listing the optional field.
#[tokio::test]
async fn missing_optional_field_is_still_rejected() {
    let handler_calls = Arc::new(AtomicUsize::new(0));
    let router = test_router(handler_calls.clone());

    let response = router
        .oneshot(json_request(
            r#"{"email":"jane@example.com","username":"jane"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["body"], "Missing Data: mobileNumber.");
    assert_eq!(handler_calls.load(Ordering::SeqCst), 0);
}

/// Tests that a fully populated payload reaches the inner handler with the
/// body replayed intact.
#[tokio::test]
async fn complete_payload_invokes_handler() {
    let handler_calls = Arc::new(AtomicUsize::new(0));
    let router = test_router(handler_calls.clone());

    let response = router
        .oneshot(json_request(
            r#"{"email":"jane@example.com","username":"jane","mobileNumber":"555-0100"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(handler_calls.load(Ordering::SeqCst), 1);
}

/// Tests that extra undeclared keys are tolerated.
///
/// The validator only checks for absence of declared fields; it never rejects
/// surplus data.
#[tokio::test]
async fn surplus_keys_are_ignored() {
    let handler_calls = Arc::new(AtomicUsize::new(0));
    let router = test_router(handler_calls.clone());

    let response = router
        .oneshot(json_request(
            r#"{"email":"a@b.c","username":"jane","mobileNumber":"1","extra":true}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(handler_calls.load(Ordering::SeqCst), 1);
}

/// Tests that a non-object body counts as having no keys.
#[tokio::test]
async fn non_object_body_reports_all_required_fields() {
    let handler_calls = Arc::new(AtomicUsize::new(0));
    let router = test_router(handler_calls.clone());

    let response = router.oneshot(json_request("[1, 2, 3]")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["body"], "Missing Data: email, username.");
    assert_eq!(handler_calls.load(Ordering::SeqCst), 0);
}
