//! Property-based tests for calendar partitioning.

use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;

use super::partition::{days_in_month, partition_month};
use super::types::DAYS_PER_WEEK;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Weeks cover every day of the month exactly once, in order.
    #[test]
    fn prop_weeks_partition_the_month(year in 1i32..3000, month in 1u32..=12) {
        let weeks = partition_month(year, month).unwrap();
        let days = days_in_month(year, month).unwrap();

        let flattened: Vec<u32> = weeks.iter().flat_map(|w| w.days.iter().copied()).collect();
        let expected: Vec<u32> = (1..=days).collect();
        prop_assert_eq!(flattened, expected);
    }

    /// Indices are dense and every week is a non-empty contiguous range.
    #[test]
    fn prop_weeks_are_dense_and_contiguous(year in 1i32..3000, month in 1u32..=12) {
        let weeks = partition_month(year, month).unwrap();

        prop_assert!((4..=6).contains(&weeks.len()));
        for (position, week) in weeks.iter().enumerate() {
            prop_assert_eq!(week.index as usize, position + 1);
            prop_assert!(!week.days.is_empty());
            prop_assert!(week.days.len() as u32 <= DAYS_PER_WEEK);
            prop_assert_eq!(week.first_day, week.days[0]);
            prop_assert_eq!(week.last_day, *week.days.last().unwrap());
            prop_assert_eq!(week.last_day - week.first_day + 1, week.days.len() as u32);
        }
    }

    /// Every week after the first starts on a Monday; every week before the last ends on a Sunday.
    #[test]
    fn prop_weeks_follow_monday_first_rows(year in 1i32..3000, month in 1u32..=12) {
        let weeks = partition_month(year, month).unwrap();
        let date = |day: u32| NaiveDate::from_ymd_opt(year, month, day).unwrap();

        for week in weeks.iter().skip(1) {
            prop_assert_eq!(date(week.first_day).weekday(), Weekday::Mon);
        }
        for week in weeks.iter().take(weeks.len() - 1) {
            prop_assert_eq!(date(week.last_day).weekday(), Weekday::Sun);
        }
    }

    /// Each day maps to exactly one week, so no bill can fall outside the partition.
    #[test]
    fn prop_every_day_has_exactly_one_week(year in 1i32..3000, month in 1u32..=12) {
        let weeks = partition_month(year, month).unwrap();
        let days = days_in_month(year, month).unwrap();

        for day in 1..=days {
            let owners = weeks.iter().filter(|w| w.contains_day(day)).count();
            prop_assert_eq!(owners, 1);
        }
    }
}
