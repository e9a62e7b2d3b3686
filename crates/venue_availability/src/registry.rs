// --- File: crates/venue_availability/src/registry.rs ---
use chrono::NaiveDate;
use std::collections::BTreeSet;
use tracing::debug;
use venue_common::services::{BookedDatesSource, BoxFuture, BoxedError};
use venue_config::AvailabilityConfig;

/// Booked dates held in memory, loaded from configuration at startup.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredBookedDates {
    dates: BTreeSet<NaiveDate>,
}

impl ConfiguredBookedDates {
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    pub fn from_config(config: &AvailabilityConfig) -> Self {
        Self::new(config.booked_dates.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Booked dates in `start..=end`. An inverted range is empty.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> BTreeSet<NaiveDate> {
        if start > end {
            return BTreeSet::new();
        }
        self.dates.range(start..=end).copied().collect()
    }
}

impl BookedDatesSource for ConfiguredBookedDates {
    fn booked_dates_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BoxFuture<'_, BTreeSet<NaiveDate>, BoxedError> {
        let dates = self.between(start, end);
        debug!("{} booked dates between {} and {}", dates.len(), start, end);
        Box::pin(async move { Ok(dates) })
    }
}
