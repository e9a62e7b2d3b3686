use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use venue_backend::build_app;
use venue_backend::service_factory::VenueServiceFactory;
use venue_common::services::{
    BookedDatesSource, Clock, FixedClock, InquirySink, ServiceFactory,
};
use venue_config::AppConfig;

/// Production services with the clock pinned to 1 December 2025.
struct PinnedFactory {
    inner: VenueServiceFactory,
}

impl ServiceFactory for PinnedFactory {
    fn clock(&self) -> Arc<dyn Clock> {
        Arc::new(FixedClock(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()))
    }

    fn booked_dates_source(&self) -> Option<Arc<dyn BookedDatesSource>> {
        self.inner.booked_dates_source()
    }

    fn inquiry_sink(&self) -> Option<Arc<dyn InquirySink>> {
        self.inner.inquiry_sink()
    }
}

fn app(config: AppConfig) -> Router {
    let factory = PinnedFactory {
        inner: VenueServiceFactory::new(&config),
    };
    build_app(Arc::new(config), &factory)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(
        app(AppConfig::default()),
        Request::get("/api/health").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn test_availability_is_served_under_api() {
    let (status, body) = send(
        app(AppConfig::default()),
        post_form(
            "/api/availability",
            "selected_date=2025-12-24&event_type=party&guest_count=60&time_slot=evening",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let page: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(page["reason_code"], "already_booked");
    assert_eq!(page["current_month"], "2025-12");
}

#[tokio::test]
async fn test_contact_is_served_under_api() {
    let (status, body) = send(
        app(AppConfig::default()),
        post_form(
            "/api/contact",
            "name=Lea&email=lea%40example.com&event_type=birthday&message=Is+June+free%3F",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let page: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(page["submit_success"], true);
}

#[tokio::test]
async fn test_runtime_flags_unmount_features() {
    let config = AppConfig {
        use_availability: false,
        use_contact: false,
        ..AppConfig::default()
    };

    let (status, _) = send(
        app(config.clone()),
        Request::get("/api/availability").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        app(config),
        Request::get("/api/contact").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_availability_section_disables_checker() {
    let config = AppConfig {
        availability: None,
        ..AppConfig::default()
    };
    let factory = VenueServiceFactory::new(&config);
    assert!(factory.booked_dates_source().is_none());
    assert!(factory.inquiry_sink().is_some());
}
