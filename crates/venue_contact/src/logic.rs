// --- File: crates/venue_contact/src/logic.rs ---
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use thiserror::Error;
use validator::{Validate, ValidationError};
use venue_common::forms::{collect_field_errors, trimmed_option};
use venue_common::services::ContactInquiry;
use venue_common::{external_service_error, not_found, FieldError, VenueError};

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Contact form is disabled.")]
    Disabled,
    #[error("Inquiry could not be delivered: {0}")]
    Delivery(String),
}

impl From<ContactError> for VenueError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::Disabled => not_found("Contact form is disabled."),
            ContactError::Delivery(msg) => external_service_error("inquiry_sink", msg),
        }
    }
}

const CONTACT_FIELDS: &[&str] = &[
    "name",
    "email",
    "phone",
    "event_type",
    "event_date",
    "guest_count",
    "message",
];

/// Raw inquiry form. Blank inputs arrive as `None`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ContactForm {
    #[serde(default, deserialize_with = "trimmed_option")]
    #[validate(
        required(message = "Please enter your name."),
        length(max = 200, message = "Your name is too long.")
    )]
    #[cfg_attr(feature = "openapi", schema(example = "Anna Muster"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "trimmed_option")]
    #[validate(
        required(message = "Please enter your email address."),
        email(message = "Please enter a valid email address.")
    )]
    #[cfg_attr(feature = "openapi", schema(example = "anna@example.com"))]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "trimmed_option")]
    #[validate(custom(function = "validate_phone"))]
    #[cfg_attr(feature = "openapi", schema(example = "+41 44 123 45 67"))]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "trimmed_option")]
    #[validate(required(message = "Please select an event type."))]
    #[cfg_attr(feature = "openapi", schema(example = "wedding"))]
    pub event_type: Option<String>,

    #[serde(default, deserialize_with = "trimmed_option")]
    #[validate(custom(function = "validate_event_date"))]
    #[cfg_attr(feature = "openapi", schema(example = "2026-06-13"))]
    pub event_date: Option<String>,

    #[serde(default, deserialize_with = "trimmed_option")]
    #[validate(custom(function = "validate_guest_count"))]
    #[cfg_attr(feature = "openapi", schema(example = "80"))]
    pub guest_count: Option<String>,

    #[serde(default, deserialize_with = "trimmed_option")]
    #[validate(
        required(message = "Please enter a message."),
        length(max = 4000, message = "Your message is too long.")
    )]
    #[cfg_attr(feature = "openapi", schema(example = "We would like to visit the venue first."))]
    pub message: Option<String>,
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Loose phone check: digits with the usual separators, an optional leading
/// `+`, and between 7 and 15 digits in total.
pub fn looks_like_phone(value: &str) -> bool {
    let body = value.strip_prefix('+').unwrap_or(value);
    let allowed = body
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '.' | '/'));
    let digits = body.chars().filter(char::is_ascii_digit).count();
    allowed && (7..=15).contains(&digits)
}

fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if looks_like_phone(value) {
        Ok(())
    } else {
        Err(invalid("phone", "Please enter a valid phone number."))
    }
}

fn parse_event_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn validate_event_date(value: &str) -> Result<(), ValidationError> {
    parse_event_date(value)
        .map(|_| ())
        .ok_or_else(|| invalid("event_date", "Please enter a valid date (YYYY-MM-DD)."))
}

fn validate_guest_count(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<u32>()
        .map(|_| ())
        .map_err(|_| invalid("guest_count", "Please enter a whole number of guests."))
}

/// Validates the form and converts it into a [`ContactInquiry`].
///
/// Optional fields that are present must be well-formed; they are not
/// silently dropped.
pub fn validate_contact_form(form: &ContactForm) -> Result<ContactInquiry, Vec<FieldError>> {
    form.validate()
        .map_err(|errors| collect_field_errors(&errors, CONTACT_FIELDS))?;

    let (Some(name), Some(email), Some(event_type), Some(message)) = (
        form.name.clone(),
        form.email.clone(),
        form.event_type.clone(),
        form.message.clone(),
    ) else {
        return Err(vec![FieldError::new("form", "The inquiry is incomplete.")]);
    };

    Ok(ContactInquiry {
        name,
        email,
        phone: form.phone.clone(),
        event_type,
        event_date: form.event_date.as_deref().and_then(parse_event_date),
        guest_count: form.guest_count.as_deref().and_then(|v| v.parse().ok()),
        message,
    })
}

// --- Page Model ---

#[derive(Serialize, Debug, Clone, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ContactPage {
    pub submit_success: bool,
    /// Submitted values, echoed back unchanged.
    pub form: ContactForm,
    pub errors: Vec<FieldError>,
    /// Delivery reference, present after a successful submission.
    #[cfg_attr(feature = "openapi", schema(example = "INQ-3F2A9C1B"))]
    pub reference: Option<String>,
}

impl ContactPage {
    pub fn rejected(form: ContactForm, errors: Vec<FieldError>) -> Self {
        Self {
            submit_success: false,
            form,
            errors,
            reference: None,
        }
    }

    pub fn submitted(form: ContactForm, reference: String) -> Self {
        Self {
            submit_success: true,
            form,
            errors: Vec::new(),
            reference: Some(reference),
        }
    }
}
