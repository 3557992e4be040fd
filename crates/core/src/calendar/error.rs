//! Calendar error types.

use thiserror::Error;

/// Calendar-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// Month outside 1-12.
    #[error("Invalid month: {0} (must be between 1 and 12)")]
    InvalidMonth(u32),

    /// Year the calendar cannot represent.
    #[error("Year out of range: {0}")]
    YearOutOfRange(i32),
}
