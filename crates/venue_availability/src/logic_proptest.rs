#[cfg(test)]
mod tests {
    use crate::calendar::{build_calendar, days_of_month, first_of_month, leading_blank_count};
    use crate::logic::*;
    use chrono::{Datelike, Duration, NaiveDate};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn base_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    // Dates within a few years of the base date
    fn date_strategy() -> impl Strategy<Value = NaiveDate> {
        (0..1500i64).prop_map(|offset| base_date() + Duration::days(offset))
    }

    fn booked_strategy() -> impl Strategy<Value = BTreeSet<NaiveDate>> {
        prop::collection::btree_set(date_strategy(), 0..40)
    }

    fn request(selected_date: NaiveDate, guest_count: u32) -> BookingRequest {
        BookingRequest {
            selected_date,
            event_type: "corporate".to_string(),
            guest_count,
            time_slot: TimeSlot::FullDay,
        }
    }

    proptest! {
        #[test]
        fn test_grid_has_padding_then_every_day(
            month in date_strategy(),
            today in date_strategy(),
            booked in booked_strategy(),
        ) {
            let first = first_of_month(month);
            let grid = build_calendar(month, None, today, &booked);
            let blanks = leading_blank_count(first) as usize;

            prop_assert!(blanks < 7);
            prop_assert_eq!(grid.len(), blanks + days_of_month(first).count());
            prop_assert!(grid[..blanks].iter().all(|c| c.is_empty));
            for (cell, day) in grid[blanks..].iter().zip(days_of_month(first)) {
                prop_assert_eq!(cell.date, Some(day));
                prop_assert_eq!(cell.is_booked, booked.contains(&day));
                prop_assert_eq!(cell.is_available, day >= today && !booked.contains(&day));
            }
        }

        #[test]
        fn test_at_most_one_selected_cell(
            month in date_strategy(),
            selected in date_strategy(),
            today in date_strategy(),
        ) {
            let grid = build_calendar(month, Some(selected), today, &BTreeSet::new());
            let count = grid.iter().filter(|c| c.is_selected).count();
            let same_month = selected.year() == month.year() && selected.month() == month.month();
            prop_assert_eq!(count, usize::from(same_month));
        }

        #[test]
        fn test_available_means_every_rule_passed(
            selected in date_strategy(),
            today in date_strategy(),
            guests in 0u32..1000,
            booked in booked_strategy(),
        ) {
            let rules = AvailabilityRules::default();
            let outcome = evaluate_availability(&request(selected, guests), today, &booked, &rules);

            let passes = selected >= today
                && !booked.contains(&selected)
                && guests <= rules.max_guests
                && (selected - today).num_days() >= rules.min_lead_days;
            prop_assert_eq!(outcome.is_available(), passes);
        }

        #[test]
        fn test_past_dates_always_report_past(
            today in date_strategy(),
            days_back in 1i64..400,
            guests in 0u32..2000,
            booked in booked_strategy(),
        ) {
            let selected = today - Duration::days(days_back);
            let outcome = evaluate_availability(
                &request(selected, guests),
                today,
                &booked,
                &AvailabilityRules::default(),
            );
            prop_assert_eq!(outcome.reason(), Some(UnavailableReason::PastDate));
        }
    }
}
