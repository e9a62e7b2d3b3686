
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use fixtures::{create_test_app, FULL_INQUIRY};
use serde_json::Value;
use tower::ServiceExt;

async fn post_form(body: &str) -> (StatusCode, Value) {
    let request = Request::post("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = create_test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_full_inquiry_is_accepted_by_logging_sink() {
    let (status, page) = post_form(FULL_INQUIRY).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["submit_success"], true);
    assert!(page["reference"].as_str().unwrap().starts_with("INQ-"));
    assert_eq!(page["form"]["phone"], "+41 79 555 12 34");
    assert_eq!(page["form"]["guest_count"], "240");
}

#[tokio::test]
async fn test_bad_event_date_keeps_other_values() {
    let body = FULL_INQUIRY.replace("event_date=2026-05-20", "event_date=next+spring");
    let (status, page) = post_form(&body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["submit_success"], false);
    assert_eq!(page["form"]["name"], "Marco Rossi");
    assert_eq!(page["form"]["event_date"], "next spring");

    let errors = page["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["field"], "event_date");
}

#[tokio::test]
async fn test_missing_body_fields() {
    let (status, page) = post_form("").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["submit_success"], false);
    assert_eq!(page["errors"].as_array().unwrap().len(), 4);
}
