// --- File: crates/venue_availability/src/calendar.rs ---
//! Month-grid construction for the availability page.
//!
//! The grid is a flat list: blank padding cells up to the weekday of the 1st
//! (weeks start on Sunday), then one cell per day of the month. The client
//! wraps it into rows of seven.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Visual state of a calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum DisplayClass {
    Selected,
    /// Used for both booked and past days; the tooltip tells them apart.
    Booked,
    Available,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CalendarDay {
    /// Absent for padding cells.
    pub date: Option<NaiveDate>,
    pub is_empty: bool,
    pub is_available: bool,
    pub is_booked: bool,
    pub is_selected: bool,
    pub display_class: Option<DisplayClass>,
    pub tooltip: String,
}

impl CalendarDay {
    /// A padding cell before the 1st of the month.
    pub fn empty() -> Self {
        Self {
            date: None,
            is_empty: true,
            is_available: false,
            is_booked: false,
            is_selected: false,
            display_class: None,
            tooltip: String::new(),
        }
    }

    fn for_date(
        date: NaiveDate,
        today: NaiveDate,
        booked: &BTreeSet<NaiveDate>,
        selected: Option<NaiveDate>,
    ) -> Self {
        let is_past = date < today;
        let is_booked = booked.contains(&date);
        let is_selected = selected == Some(date);

        // selected > past > booked > available
        let (display_class, tooltip) = if is_selected {
            (DisplayClass::Selected, "Selected date")
        } else if is_past {
            (DisplayClass::Booked, "Past date")
        } else if is_booked {
            (DisplayClass::Booked, "Already booked")
        } else {
            (DisplayClass::Available, "Available - Click to select")
        };

        Self {
            date: Some(date),
            is_empty: false,
            is_available: !is_past && !is_booked,
            is_booked,
            is_selected,
            display_class: Some(display_class),
            tooltip: tooltip.to_string(),
        }
    }
}

/// The 1st of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// The last day of the month containing `date`.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    days_of_month(first).last().unwrap_or(first)
}

/// Every day of the month starting at `first`, ascending.
pub fn days_of_month(first: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let month = first.month();
    first.iter_days().take_while(move |day| day.month() == month)
}

/// Number of padding cells before the 1st (Sunday = 0).
pub fn leading_blank_count(first: NaiveDate) -> u32 {
    first.weekday().num_days_from_sunday()
}

/// Move `month` by `delta` whole months, staying on the 1st.
///
/// Out-of-range results leave the month unchanged.
pub fn shift_month(month: NaiveDate, delta: i32) -> NaiveDate {
    let first = first_of_month(month);
    let shifted = if delta >= 0 {
        first.checked_add_months(Months::new(delta.unsigned_abs()))
    } else {
        first.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(first)
}

/// `YYYY-MM` key used in query strings and page models.
pub fn month_key(month: NaiveDate) -> String {
    month.format("%Y-%m").to_string()
}

/// Parses a `month` query parameter (`YYYY-MM` or `YYYY-MM-DD`) to the 1st of that month.
pub fn parse_month_param(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d"))
        .ok()
        .map(first_of_month)
}

/// Picks the month to render: explicit parameter, then the selected date's
/// month, then the current month. An unparseable parameter is ignored.
pub fn resolve_month(
    month_param: Option<&str>,
    selected: Option<NaiveDate>,
    today: NaiveDate,
) -> NaiveDate {
    let explicit = month_param
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| {
            let parsed = parse_month_param(value);
            if parsed.is_none() {
                debug!("Ignoring unparseable month parameter '{}'", value);
            }
            parsed
        });

    explicit
        .or_else(|| selected.map(first_of_month))
        .unwrap_or_else(|| first_of_month(today))
}

/// Builds the month grid for `month` (any day of it) as seen on `today`.
pub fn build_calendar(
    month: NaiveDate,
    selected: Option<NaiveDate>,
    today: NaiveDate,
    booked: &BTreeSet<NaiveDate>,
) -> Vec<CalendarDay> {
    let first = first_of_month(month);
    let blanks = leading_blank_count(first) as usize;

    let mut days = Vec::with_capacity(blanks + 31);
    days.extend(std::iter::repeat_with(CalendarDay::empty).take(blanks));
    days.extend(
        days_of_month(first).map(|date| CalendarDay::for_date(date, today, booked, selected)),
    );
    days
}
