// --- File: crates/venue_availability/src/doc.rs ---
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::calendar::{CalendarDay, DisplayClass};
use crate::logic::{
    AvailabilityPage, AvailabilityQuery, BookingForm, TimeSlot, TimeSlotOption,
    UnavailableReason,
};
use venue_common::FieldError;

/// OpenAPI documentation for the availability checker
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::get_availability_handler,
        crate::handlers::check_availability_handler
    ),
    components(
        schemas(
            AvailabilityQuery,
            AvailabilityPage,
            BookingForm,
            CalendarDay,
            DisplayClass,
            FieldError,
            TimeSlot,
            TimeSlotOption,
            UnavailableReason
        )
    ),
    tags(
        (name = "Availability", description = "Venue date availability checker and calendar")
    ),
    servers(
        (url = "/api", description = "Venue API server")
    )
)]
pub struct AvailabilityApiDoc;
