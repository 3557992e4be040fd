//! Calendar data types.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::CalendarError;

/// Number of days in a calendar row.
pub const DAYS_PER_WEEK: u32 = 7;

/// A validated calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Month {
    /// Calendar year.
    pub year: i32,
    /// Month number (1-12).
    pub month: u32,
}

impl Month {
    /// Creates a month after checking that the calendar can represent it.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::InvalidMonth` if `month` is not in 1-12 and
    /// `CalendarError::YearOutOfRange` if the year cannot be represented.
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(CalendarError::YearOutOfRange(year));
        }
        Ok(Self { year, month })
    }

    /// Returns the first date of the month.
    #[must_use]
    pub fn first_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// Returns the number of days in the month (28-31).
    #[must_use]
    pub fn days(&self) -> u32 {
        (29..=31)
            .rev()
            .find(|&day| NaiveDate::from_ymd_opt(self.year, self.month, day).is_some())
            .unwrap_or(28)
    }

    /// Returns true if the date falls within this month.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Splits the month into the rows a Monday-first calendar would show.
    ///
    /// Rows without any day of this month are not emitted, so indices are
    /// dense over the returned weeks.
    #[must_use]
    pub fn weeks(&self) -> Vec<Week> {
        let offset = self.first_date().weekday().num_days_from_monday();
        let mut rows: Vec<Vec<u32>> = Vec::new();

        for day in 1..=self.days() {
            let row = ((day - 1 + offset) / DAYS_PER_WEEK) as usize;
            if rows.len() <= row {
                rows.resize_with(row + 1, Vec::new);
            }
            rows[row].push(day);
        }

        rows.into_iter()
            .filter(|days| !days.is_empty())
            .zip(1u32..)
            .filter_map(|(days, index)| Week::from_days(index, days))
            .collect()
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// One calendar week of a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    /// 1-based position within the month.
    pub index: u32,
    /// Days of the month in this week, ascending.
    pub days: Vec<u32>,
    /// Smallest day in `days`.
    pub first_day: u32,
    /// Largest day in `days`.
    pub last_day: u32,
}

impl Week {
    /// Builds a week from its days, or `None` if there are no days.
    #[must_use]
    pub fn from_days(index: u32, mut days: Vec<u32>) -> Option<Self> {
        days.sort_unstable();
        days.dedup();
        let first_day = *days.first()?;
        let last_day = *days.last()?;
        Some(Self {
            index,
            days,
            first_day,
            last_day,
        })
    }

    /// Returns true if `day` lies within `[first_day, last_day]`.
    #[must_use]
    pub fn contains_day(&self, day: u32) -> bool {
        (self.first_day..=self.last_day).contains(&day)
    }
}
