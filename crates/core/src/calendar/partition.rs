//! Month partitioning entry points.

use super::error::CalendarError;
use super::types::{Month, Week};

/// Splits `(year, month)` into its Monday-first calendar weeks.
///
/// Every day of the month belongs to exactly one returned week, and weeks are
/// returned in order with 1-based indices.
///
/// # Errors
///
/// Returns `CalendarError::InvalidMonth` if `month` is not in 1-12.
pub fn partition_month(year: i32, month: u32) -> Result<Vec<Week>, CalendarError> {
    Ok(Month::new(year, month)?.weeks())
}

/// Returns the number of days in `(year, month)`.
///
/// # Errors
///
/// Returns `CalendarError::InvalidMonth` if `month` is not in 1-12.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    Ok(Month::new(year, month)?.days())
}
