// --- File: crates/venue_contact/src/doc.rs ---
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{ContactForm, ContactPage};
use venue_common::FieldError;

/// OpenAPI documentation for the contact form
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::get_contact_handler,
        crate::handlers::submit_contact_handler
    ),
    components(
        schemas(ContactForm, ContactPage, FieldError)
    ),
    tags(
        (name = "Contact", description = "Venue inquiry form")
    )
)]
pub struct ContactApiDoc;
