// --- File: crates/venue_contact/src/handlers.rs ---
use crate::logic::{validate_contact_form, ContactError, ContactForm, ContactPage};
use axum::{
    extract::{Form, State},
    response::{Json, Response},
};
use std::sync::Arc;
use tracing::{error, info};
use venue_common::services::InquirySink;
use venue_common::{is_contact_enabled, map_json_error, VenueError};
use venue_config::AppConfig;

// State for contact handlers
#[derive(Clone)]
pub struct ContactState {
    pub config: Arc<AppConfig>,
    pub sink: Arc<dyn InquirySink>,
}

impl ContactState {
    fn ensure_enabled(&self) -> Result<(), ContactError> {
        if is_contact_enabled(&self.config) {
            Ok(())
        } else {
            Err(ContactError::Disabled)
        }
    }
}

/// Validates the form and, when it is valid, hands the inquiry to the sink.
pub async fn submit_inquiry(
    sink: &dyn InquirySink,
    form: ContactForm,
) -> Result<ContactPage, ContactError> {
    let inquiry = match validate_contact_form(&form) {
        Ok(inquiry) => inquiry,
        Err(errors) => {
            info!("Contact form rejected with {} field error(s)", errors.len());
            return Ok(ContactPage::rejected(form, errors));
        }
    };

    let receipt = sink.deliver(inquiry).await.map_err(|e| {
        error!("Inquiry delivery failed: {}", e);
        ContactError::Delivery(e.to_string())
    })?;
    info!(
        "Inquiry {} delivered via {}",
        receipt.reference, receipt.channel
    );

    Ok(ContactPage::submitted(form, receipt.reference))
}

/// Handler to render the empty contact form.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/contact", // Path relative to /api
    responses(
        (status = 200, description = "Empty contact form", body = ContactPage),
        (status = 404, description = "Contact form disabled")
    ),
    tag = "Contact"
))]
pub async fn get_contact_handler(
    State(state): State<Arc<ContactState>>,
) -> Result<Json<ContactPage>, Response> {
    map_json_error(
        state.ensure_enabled().map(|_| ContactPage::default()),
        VenueError::from,
    )
}

/// Handler to submit an inquiry.
///
/// Field errors come back in the page model with status 200.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/contact", // Path relative to /api
    request_body(content = ContactForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Submission result or field errors", body = ContactPage),
        (status = 404, description = "Contact form disabled"),
        (status = 502, description = "Inquiry could not be delivered")
    ),
    tag = "Contact"
))]
pub async fn submit_contact_handler(
    State(state): State<Arc<ContactState>>,
    Form(form): Form<ContactForm>,
) -> Result<Json<ContactPage>, Response> {
    let result = match state.ensure_enabled() {
        Ok(()) => submit_inquiry(state.sink.as_ref(), form).await,
        Err(e) => Err(e),
    };
    map_json_error(result, VenueError::from)
}
