// --- File: crates/venue_contact/src/sink.rs ---
use tracing::info;
use uuid::Uuid;
use venue_common::services::{BoxFuture, BoxedError, ContactInquiry, InquiryReceipt, InquirySink};

/// Log target for delivered inquiries, so they can be routed separately.
pub const INQUIRY_LOG_TARGET: &str = "venue::inquiries";

/// Inquiry sink that records each inquiry as a structured log event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingInquirySink;

impl LoggingInquirySink {
    pub fn new() -> Self {
        Self
    }
}

/// Short reference derived from a random UUID, e.g. `INQ-3F2A9C1B`.
pub fn new_reference() -> String {
    let id = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("INQ-{}", &id[..8])
}

impl InquirySink for LoggingInquirySink {
    fn deliver(&self, inquiry: ContactInquiry) -> BoxFuture<'_, InquiryReceipt, BoxedError> {
        Box::pin(async move {
            let reference = new_reference();
            info!(
                target: INQUIRY_LOG_TARGET,
                reference = %reference,
                name = %inquiry.name,
                email = %inquiry.email,
                phone = inquiry.phone.as_deref().unwrap_or("-"),
                event_type = %inquiry.event_type,
                event_date = ?inquiry.event_date,
                guest_count = ?inquiry.guest_count,
                message_length = inquiry.message.chars().count(),
                "New venue inquiry"
            );
            Ok(InquiryReceipt {
                reference,
                channel: "log".to_string(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_logging_sink_returns_reference() {
        let inquiry = ContactInquiry {
            name: "Anna".to_string(),
            email: "anna@example.com".to_string(),
            phone: None,
            event_type: "wedding".to_string(),
            event_date: None,
            guest_count: Some(80),
            message: "Hello".to_string(),
        };
        let receipt = LoggingInquirySink::new().deliver(inquiry).await.unwrap();
        assert_eq!(receipt.channel, "log");
        assert!(receipt.reference.starts_with("INQ-"));
        assert_eq!(receipt.reference.len(), 12);
    }

    #[test]
    fn test_references_are_distinct() {
        assert_ne!(new_reference(), new_reference());
    }
}
