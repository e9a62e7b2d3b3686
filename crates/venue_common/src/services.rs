// --- File: crates/venue_common/src/services.rs ---
//! Service abstractions for the collaborators the request handlers depend on.
//!
//! Handlers reach the clock, the booked-dates registry and the inquiry
//! delivery channel only through the traits below.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

impl BoxedError {
    /// Box any concrete error.
    pub fn new<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        BoxedError(Box::new(err))
    }
}

/// Source of "today" for every rule that compares against the current date.
pub trait Clock: Send + Sync {
    /// The current calendar date (day granularity).
    fn today(&self) -> NaiveDate;
}

/// Reads the system clock and converts to the venue's local date.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    time_zone: Tz,
}

impl SystemClock {
    pub fn new(time_zone: Tz) -> Self {
        Self { time_zone }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.time_zone).date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Read-only registry of dates on which the venue is already taken.
pub trait BookedDatesSource: Send + Sync {
    /// Booked dates within `start..=end`. An inverted range yields an empty set.
    fn booked_dates_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BoxFuture<'_, BTreeSet<NaiveDate>, BoxedError>;
}

/// Destination for contact inquiries that passed validation.
pub trait InquirySink: Send + Sync {
    /// Hand over one inquiry.
    fn deliver(&self, inquiry: ContactInquiry) -> BoxFuture<'_, InquiryReceipt, BoxedError>;
}

/// A factory for creating service instances.
///
/// This trait provides methods for creating instances of the collaborators the
/// feature crates need. Returns `None` for a service whose feature is switched
/// off.
pub trait ServiceFactory: Send + Sync {
    /// Get the clock.
    fn clock(&self) -> Arc<dyn Clock>;

    /// Get the booked dates registry.
    fn booked_dates_source(&self) -> Option<Arc<dyn BookedDatesSource>>;

    /// Get the inquiry sink.
    fn inquiry_sink(&self) -> Option<Arc<dyn InquirySink>>;
}

/// A validated contact inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub event_type: String,
    pub event_date: Option<NaiveDate>,
    pub guest_count: Option<u32>,
    pub message: String,
}

/// Represents the result of an inquiry hand-over.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct InquiryReceipt {
    /// Reference the visitor can quote in follow-up mail.
    pub reference: String,
    /// Where the inquiry went (e.g. "log").
    pub channel: String,
}
