// --- File: crates/services/venue_backend/src/service_factory.rs ---
//! Service factory implementation.
//!
//! Builds the collaborators for the feature crates from the loaded
//! configuration. A service whose feature is compiled out or switched off at
//! runtime is simply absent.
use chrono_tz::Tz;
use std::sync::Arc;
#[allow(unused_imports)] // only used by some features
use tracing::info;
use venue_common::services::{
    BookedDatesSource, Clock, InquirySink, ServiceFactory, SystemClock,
};
use venue_config::AppConfig;

#[cfg(feature = "availability")]
use venue_availability::registry::ConfiguredBookedDates;
#[cfg(feature = "availability")]
use venue_common::is_availability_enabled;

#[cfg(feature = "contact")]
use venue_common::is_contact_enabled;
#[cfg(feature = "contact")]
use venue_contact::sink::LoggingInquirySink;

pub struct VenueServiceFactory {
    clock: Arc<dyn Clock>,
    booked_dates: Option<Arc<dyn BookedDatesSource>>,
    inquiry_sink: Option<Arc<dyn InquirySink>>,
}

impl VenueServiceFactory {
    /// Create a new service factory.
    pub fn new(config: &AppConfig) -> Self {
        let time_zone = config
            .availability
            .as_ref()
            .map(|availability| availability.tz())
            .unwrap_or(Tz::Europe__Zurich);

        #[allow(unused_mut)]
        let mut factory = Self {
            clock: Arc::new(SystemClock::new(time_zone)),
            booked_dates: None,
            inquiry_sink: None,
        };

        #[cfg(feature = "availability")]
        {
            match config.availability.as_ref() {
                Some(availability) if is_availability_enabled(config) => {
                    let registry = ConfiguredBookedDates::from_config(availability);
                    info!(
                        "Availability checker enabled with {} booked date(s), today is {} in {}",
                        registry.len(),
                        factory.clock.today(),
                        time_zone
                    );
                    factory.booked_dates = Some(Arc::new(registry));
                }
                _ => info!(
                    "Availability feature compiled, but disabled via runtime config or missing availability section."
                ),
            }
        }

        #[cfg(feature = "contact")]
        {
            if is_contact_enabled(config) {
                info!("Contact form enabled, inquiries are logged");
                factory.inquiry_sink = Some(Arc::new(LoggingInquirySink::new()));
            } else {
                info!("Contact feature compiled, but disabled via runtime config.");
            }
        }

        factory
    }
}

impl ServiceFactory for VenueServiceFactory {
    fn clock(&self) -> Arc<dyn Clock> {
        self.clock.clone()
    }

    fn booked_dates_source(&self) -> Option<Arc<dyn BookedDatesSource>> {
        self.booked_dates.clone()
    }

    fn inquiry_sink(&self) -> Option<Arc<dyn InquirySink>> {
        self.inquiry_sink.clone()
    }
}
