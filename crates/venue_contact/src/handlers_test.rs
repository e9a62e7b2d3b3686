#[cfg(test)]
mod tests {
    use crate::handlers::{submit_inquiry, ContactState};
    use crate::logic::{ContactError, ContactForm};
    use crate::routes::routes;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;
    use venue_common::services::{
        BoxFuture, BoxedError, ContactInquiry, InquiryReceipt, InquirySink,
    };
    use venue_config::AppConfig;

    #[derive(Default)]
    struct RecordingSink {
        received: Mutex<Vec<ContactInquiry>>,
    }

    impl InquirySink for RecordingSink {
        fn deliver(&self, inquiry: ContactInquiry) -> BoxFuture<'_, InquiryReceipt, BoxedError> {
            self.received.lock().unwrap().push(inquiry);
            Box::pin(async {
                Ok(InquiryReceipt {
                    reference: "INQ-TEST0001".to_string(),
                    channel: "memory".to_string(),
                })
            })
        }
    }

    struct FailingSink;

    impl InquirySink for FailingSink {
        fn deliver(&self, _inquiry: ContactInquiry) -> BoxFuture<'_, InquiryReceipt, BoxedError> {
            Box::pin(async { Err(BoxedError::new(std::fmt::Error)) })
        }
    }

    fn post(body: &str) -> Request<Body> {
        Request::post("/contact")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(state: ContactState, request: Request<Body>) -> (StatusCode, Value) {
        let response = routes(Arc::new(state)).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    const VALID: &str =
        "name=Anna&email=anna%40example.com&event_type=wedding&guest_count=90&message=Hello+there";

    #[tokio::test]
    async fn test_valid_submission_reaches_sink() {
        let sink = Arc::new(RecordingSink::default());
        let state = ContactState {
            config: Arc::new(AppConfig::default()),
            sink: sink.clone(),
        };
        let (status, page) = send(state, post(VALID)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["submit_success"], true);
        assert_eq!(page["reference"], "INQ-TEST0001");

        let received = sink.received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].guest_count, Some(90));
        assert_eq!(received[0].message, "Hello there");
    }

    #[tokio::test]
    async fn test_invalid_submission_is_echoed_and_not_delivered() {
        let sink = Arc::new(RecordingSink::default());
        let state = ContactState {
            config: Arc::new(AppConfig::default()),
            sink: sink.clone(),
        };
        let (status, page) = send(
            state,
            post("name=Anna&email=anna-at-example&event_type=wedding&message=Hi"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["submit_success"], false);
        assert_eq!(page["form"]["email"], "anna-at-example");
        assert_eq!(page["errors"][0]["field"], "email");
        assert!(page["reference"].is_null());
        assert!(sink.received.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sink_failure_is_bad_gateway() {
        let state = ContactState {
            config: Arc::new(AppConfig::default()),
            sink: Arc::new(FailingSink),
        };
        let (status, body) = send(state, post(VALID)).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], 502);
    }

    #[tokio::test]
    async fn test_disabled_contact_form() {
        let state = ContactState {
            config: Arc::new(AppConfig {
                use_contact: false,
                ..AppConfig::default()
            }),
            sink: Arc::new(RecordingSink::default()),
        };
        let (status, _) = send(state, Request::get("/contact").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_returns_empty_page() {
        let state = ContactState {
            config: Arc::new(AppConfig::default()),
            sink: Arc::new(RecordingSink::default()),
        };
        let (status, page) = send(state, Request::get("/contact").body(Body::empty()).unwrap()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["submit_success"], false);
        assert!(page["form"]["name"].is_null());
        assert!(page["errors"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_inquiry_propagates_delivery_error() {
        let result = submit_inquiry(
            &FailingSink,
            ContactForm {
                name: Some("Anna".to_string()),
                email: Some("anna@example.com".to_string()),
                event_type: Some("party".to_string()),
                message: Some("Hi".to_string()),
                ..ContactForm::default()
            },
        )
        .await;
        assert!(matches!(result, Err(ContactError::Delivery(_))));
    }
}
