// --- File: crates/venue_availability/src/handlers.rs ---
use crate::calendar::{first_of_month, last_of_month, month_key, resolve_month};
use crate::logic::{
    check_availability, AvailabilityError, AvailabilityOutcome, AvailabilityPage,
    AvailabilityQuery, AvailabilityRules, BookingForm,
};
use axum::{
    extract::{Form, Query, State},
    response::Json,
};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{info, warn};
use venue_common::services::{BookedDatesSource, Clock};
use venue_common::{is_availability_enabled, VenueError};
use venue_config::AppConfig;

// Shared state for the availability handlers
#[derive(Clone)]
pub struct AvailabilityState {
    pub config: Arc<AppConfig>,
    pub clock: Arc<dyn Clock>,
    pub booked_dates: Arc<dyn BookedDatesSource>,
    pub rules: AvailabilityRules,
}

impl AvailabilityState {
    /// Builds the state, taking the business limits from the availability config section.
    pub fn new(
        config: Arc<AppConfig>,
        clock: Arc<dyn Clock>,
        booked_dates: Arc<dyn BookedDatesSource>,
    ) -> Self {
        let rules = config
            .availability
            .as_ref()
            .map(AvailabilityRules::from)
            .unwrap_or_default();
        Self {
            config,
            clock,
            booked_dates,
            rules,
        }
    }

    fn ensure_enabled(&self) -> Result<(), AvailabilityError> {
        if is_availability_enabled(&self.config) {
            Ok(())
        } else {
            Err(AvailabilityError::Disabled)
        }
    }

    async fn booked_in_month(&self, month: NaiveDate) -> Result<BTreeSet<NaiveDate>, AvailabilityError> {
        self.booked_dates
            .booked_dates_between(first_of_month(month), last_of_month(month))
            .await
            .map_err(|e| {
                warn!("Booked dates lookup failed for {}: {}", month_key(month), e);
                AvailabilityError::RegistryUnavailable(e.to_string())
            })
    }
}

/// Handler to render the availability page for a month.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/availability", // Path relative to /api
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Calendar for the requested month", body = AvailabilityPage),
        (status = 404, description = "Availability checker disabled"),
        (status = 502, description = "Booked dates registry unavailable")
    ),
    tag = "Availability"
))]
pub async fn get_availability_handler(
    State(state): State<Arc<AvailabilityState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityPage>, VenueError> {
    state.ensure_enabled()?;

    let today = state.clock.today();
    let month = resolve_month(query.month.as_deref(), None, today);
    info!("Rendering availability calendar for {}", month_key(month));

    let booked = state.booked_in_month(month).await?;
    Ok(Json(AvailabilityPage::new(
        month,
        BookingForm::default(),
        today,
        &booked,
    )))
}

/// Handler to check a date against the booking rules.
///
/// Validation errors and unavailable dates are part of the page model and
/// come back with status 200.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/availability", // Path relative to /api
    request_body(content = BookingForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Check result, field errors and calendar", body = AvailabilityPage),
        (status = 404, description = "Availability checker disabled"),
        (status = 502, description = "Booked dates registry unavailable")
    ),
    tag = "Availability"
))]
pub async fn check_availability_handler(
    State(state): State<Arc<AvailabilityState>>,
    Form(form): Form<BookingForm>,
) -> Result<Json<AvailabilityPage>, VenueError> {
    state.ensure_enabled()?;

    let today = state.clock.today();
    let month = resolve_month(None, form.selected_date_value(), today);
    let booked = state.booked_in_month(month).await?;

    let (page, outcome) = check_availability(form, month, today, &booked, &state.rules);
    match outcome {
        None => info!("Availability form rejected with {} field error(s)", page.errors.len()),
        Some(AvailabilityOutcome::Available) => info!(
            "Date {} available",
            page.form.selected_date.as_deref().unwrap_or_default()
        ),
        Some(AvailabilityOutcome::Unavailable(reason)) => info!(
            "Date {} unavailable: {}",
            page.form.selected_date.as_deref().unwrap_or_default(),
            reason.code()
        ),
    }

    Ok(Json(page))
}
