// --- File: crates/venue_availability/src/logic.rs ---
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::{Validate, ValidationError};
use venue_common::forms::{collect_field_errors, trimmed_option};
use venue_common::{external_service_error, not_found, FieldError, VenueError};
use venue_config::AvailabilityConfig;

use crate::calendar::{build_calendar, month_key, shift_month, CalendarDay};

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum AvailabilityError {
    #[error("Availability checker is disabled.")]
    Disabled,
    #[error("Booked dates registry unavailable: {0}")]
    RegistryUnavailable(String),
}

impl From<AvailabilityError> for VenueError {
    fn from(err: AvailabilityError) -> Self {
        match err {
            AvailabilityError::Disabled => not_found("Availability checker is disabled."),
            AvailabilityError::RegistryUnavailable(msg) => {
                external_service_error("booked_dates", msg)
            }
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown time slot: {0}")]
pub struct UnknownTimeSlot(pub String);

// --- Data Structures ---

/// Part of the day the venue is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
    FullDay,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 4] = [
        TimeSlot::Morning,
        TimeSlot::Afternoon,
        TimeSlot::Evening,
        TimeSlot::FullDay,
    ];

    /// Form value of the slot.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "morning",
            TimeSlot::Afternoon => "afternoon",
            TimeSlot::Evening => "evening",
            TimeSlot::FullDay => "full-day",
        }
    }

    /// Label shown to visitors.
    pub fn display_label(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning (9:00 AM - 12:00 PM)",
            TimeSlot::Afternoon => "Afternoon (12:00 PM - 5:00 PM)",
            TimeSlot::Evening => "Evening (5:00 PM - 10:00 PM)",
            TimeSlot::FullDay => "Full Day",
        }
    }
}

impl FromStr for TimeSlot {
    type Err = UnknownTimeSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSlot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| UnknownTimeSlot(s.to_string()))
    }
}

/// One option of the time-slot select box.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TimeSlotOption {
    #[cfg_attr(feature = "openapi", schema(example = "full-day"))]
    pub value: String,
    #[cfg_attr(feature = "openapi", schema(example = "Full Day"))]
    pub label: String,
}

impl From<TimeSlot> for TimeSlotOption {
    fn from(slot: TimeSlot) -> Self {
        Self {
            value: slot.as_str().to_string(),
            label: slot.display_label().to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct AvailabilityQuery {
    /// Month to show, `YYYY-MM` (a full `YYYY-MM-DD` date is accepted too)
    #[cfg_attr(feature = "openapi", schema(example = "2025-12"))]
    pub month: Option<String>,
}

const BOOKING_FIELDS: &[&str] = &["selected_date", "event_type", "guest_count", "time_slot"];

/// Raw availability form as posted by the browser. Blank inputs arrive as `None`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingForm {
    #[serde(default, deserialize_with = "trimmed_option")]
    #[validate(
        required(message = "Please select a date."),
        custom(function = "validate_form_date")
    )]
    #[cfg_attr(feature = "openapi", schema(example = "2025-12-20"))]
    pub selected_date: Option<String>,

    #[serde(default, deserialize_with = "trimmed_option")]
    #[validate(required(message = "Please select an event type."))]
    #[cfg_attr(feature = "openapi", schema(example = "wedding"))]
    pub event_type: Option<String>,

    #[serde(default, deserialize_with = "trimmed_option")]
    #[validate(
        required(message = "Please enter the expected number of guests."),
        custom(function = "validate_guest_count")
    )]
    #[cfg_attr(feature = "openapi", schema(example = "120"))]
    pub guest_count: Option<String>,

    #[serde(default, deserialize_with = "trimmed_option")]
    #[validate(
        required(message = "Please select a time slot."),
        custom(function = "validate_time_slot")
    )]
    #[cfg_attr(feature = "openapi", schema(example = "evening"))]
    pub time_slot: Option<String>,
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Parses a date form value (`YYYY-MM-DD`).
pub fn parse_form_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn validate_form_date(value: &str) -> Result<(), ValidationError> {
    parse_form_date(value)
        .map(|_| ())
        .ok_or_else(|| invalid("date", "Please enter a valid date (YYYY-MM-DD)."))
}

fn validate_guest_count(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<u32>()
        .map(|_| ())
        .map_err(|_| invalid("guest_count", "Please enter a whole number of guests."))
}

fn validate_time_slot(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<TimeSlot>()
        .map(|_| ())
        .map_err(|_| invalid("time_slot", "Please select a valid time slot."))
}

impl BookingForm {
    /// The selected date if it parses, whether or not the rest of the form is valid.
    pub fn selected_date_value(&self) -> Option<NaiveDate> {
        self.selected_date.as_deref().and_then(parse_form_date)
    }

    /// Validates the form and converts it into a [`BookingRequest`].
    pub fn to_request(&self) -> Result<BookingRequest, Vec<FieldError>> {
        self.validate()
            .map_err(|errors| collect_field_errors(&errors, BOOKING_FIELDS))?;

        let (Some(selected_date), Some(event_type), Some(guest_count), Some(time_slot)) = (
            self.selected_date_value(),
            self.event_type.clone(),
            self.guest_count.as_deref().and_then(|v| v.parse::<u32>().ok()),
            self.time_slot.as_deref().and_then(|v| v.parse::<TimeSlot>().ok()),
        ) else {
            return Err(vec![FieldError::new(
                "form",
                "The booking request is incomplete.",
            )]);
        };

        Ok(BookingRequest {
            selected_date,
            event_type,
            guest_count,
            time_slot,
        })
    }
}

/// A complete, well-formed booking request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingRequest {
    pub selected_date: NaiveDate,
    pub event_type: String,
    pub guest_count: u32,
    pub time_slot: TimeSlot,
}

/// Business limits applied after the form is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityRules {
    pub max_guests: u32,
    pub min_lead_days: i64,
}

impl Default for AvailabilityRules {
    fn default() -> Self {
        Self {
            max_guests: 500,
            min_lead_days: 7,
        }
    }
}

impl From<&AvailabilityConfig> for AvailabilityRules {
    fn from(config: &AvailabilityConfig) -> Self {
        Self {
            max_guests: config.max_guests,
            min_lead_days: config.min_lead_days,
        }
    }
}

/// Why a date cannot be offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum UnavailableReason {
    PastDate,
    AlreadyBooked,
    ExceedsCapacity { max_guests: u32 },
    InsufficientNotice { min_lead_days: i64 },
}

impl UnavailableReason {
    pub fn code(&self) -> &'static str {
        match self {
            UnavailableReason::PastDate => "past_date",
            UnavailableReason::AlreadyBooked => "already_booked",
            UnavailableReason::ExceedsCapacity { .. } => "exceeds_capacity",
            UnavailableReason::InsufficientNotice { .. } => "insufficient_notice",
        }
    }
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnavailableReason::PastDate => {
                write!(f, "The selected date is in the past. Please choose a future date.")
            }
            UnavailableReason::AlreadyBooked => write!(
                f,
                "Unfortunately, this date is already booked. Please select another date or contact us for alternative options."
            ),
            UnavailableReason::ExceedsCapacity { max_guests } => write!(
                f,
                "The guest count exceeds our maximum capacity of {}. Please contact us to discuss options.",
                max_guests
            ),
            UnavailableReason::InsufficientNotice { min_lead_days: 7 } => write!(
                f,
                "We require at least 7 days advance notice for bookings. Please select a date at least one week from now."
            ),
            UnavailableReason::InsufficientNotice { min_lead_days } => write!(
                f,
                "We require at least {0} days advance notice for bookings. Please select a date at least {0} days from now.",
                min_lead_days
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityOutcome {
    Available,
    Unavailable(UnavailableReason),
}

impl AvailabilityOutcome {
    pub fn is_available(&self) -> bool {
        matches!(self, AvailabilityOutcome::Available)
    }

    pub fn reason(&self) -> Option<UnavailableReason> {
        match self {
            AvailabilityOutcome::Available => None,
            AvailabilityOutcome::Unavailable(reason) => Some(*reason),
        }
    }
}

// --- Availability Logic ---

/// Runs the business rules against a well-formed request. The first failing
/// rule decides the reason; later rules are not evaluated.
pub fn evaluate_availability(
    request: &BookingRequest,
    today: NaiveDate,
    booked: &BTreeSet<NaiveDate>,
    rules: &AvailabilityRules,
) -> AvailabilityOutcome {
    use AvailabilityOutcome::Unavailable;

    if request.selected_date < today {
        return Unavailable(UnavailableReason::PastDate);
    }

    if booked.contains(&request.selected_date) {
        return Unavailable(UnavailableReason::AlreadyBooked);
    }

    if request.guest_count > rules.max_guests {
        return Unavailable(UnavailableReason::ExceedsCapacity {
            max_guests: rules.max_guests,
        });
    }

    // exactly min_lead_days is accepted
    if (request.selected_date - today).num_days() < rules.min_lead_days {
        return Unavailable(UnavailableReason::InsufficientNotice {
            min_lead_days: rules.min_lead_days,
        });
    }

    AvailabilityOutcome::Available
}

// --- Page Model ---

#[derive(Serialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AvailabilityPage {
    #[cfg_attr(feature = "openapi", schema(example = "2025-12"))]
    pub current_month: String,
    #[cfg_attr(feature = "openapi", schema(example = "December 2025"))]
    pub month_label: String,
    #[cfg_attr(feature = "openapi", schema(example = "2025-11"))]
    pub previous_month: String,
    #[cfg_attr(feature = "openapi", schema(example = "2026-01"))]
    pub next_month: String,
    /// True once the business rules ran (the form itself was valid).
    pub check_performed: bool,
    pub is_available: bool,
    #[cfg_attr(feature = "openapi", schema(example = "already_booked"))]
    pub reason_code: Option<String>,
    pub unavailable_reason: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "Evening (5:00 PM - 10:00 PM)"))]
    pub time_slot_display: Option<String>,
    pub form: BookingForm,
    pub errors: Vec<FieldError>,
    pub time_slots: Vec<TimeSlotOption>,
    pub calendar: Vec<CalendarDay>,
}

impl AvailabilityPage {
    /// Page for `month` with the calendar filled in and no check result yet.
    pub fn new(
        month: NaiveDate,
        form: BookingForm,
        today: NaiveDate,
        booked: &BTreeSet<NaiveDate>,
    ) -> Self {
        let selected = form.selected_date_value();
        let time_slot_display = form.time_slot.as_deref().map(|raw| {
            raw.parse::<TimeSlot>()
                .map(|slot| slot.display_label().to_string())
                .unwrap_or_else(|_| raw.to_string())
        });

        Self {
            current_month: month_key(month),
            month_label: month.format("%B %Y").to_string(),
            previous_month: month_key(shift_month(month, -1)),
            next_month: month_key(shift_month(month, 1)),
            check_performed: false,
            is_available: false,
            reason_code: None,
            unavailable_reason: None,
            time_slot_display,
            form,
            errors: Vec::new(),
            time_slots: TimeSlot::ALL.into_iter().map(TimeSlotOption::from).collect(),
            calendar: build_calendar(month, selected, today, booked),
        }
    }

    pub fn record_outcome(&mut self, outcome: AvailabilityOutcome) {
        self.check_performed = true;
        self.is_available = outcome.is_available();
        self.reason_code = outcome.reason().map(|r| r.code().to_string());
        self.unavailable_reason = outcome.reason().map(|r| r.to_string());
    }
}

/// Full POST flow on already-fetched data: validate, evaluate, render.
///
/// `month` must be the month the booked set was fetched for; it is derived
/// from the selected date by the caller.
pub fn check_availability(
    form: BookingForm,
    month: NaiveDate,
    today: NaiveDate,
    booked: &BTreeSet<NaiveDate>,
    rules: &AvailabilityRules,
) -> (AvailabilityPage, Option<AvailabilityOutcome>) {
    let request = form.to_request();
    let mut page = AvailabilityPage::new(month, form, today, booked);

    match request {
        Err(errors) => {
            page.errors = errors;
            (page, None)
        }
        Ok(request) => {
            let outcome = evaluate_availability(&request, today, booked, rules);
            page.record_outcome(outcome);
            (page, Some(outcome))
        }
    }
}
