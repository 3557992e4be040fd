//! Cash-flow error types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::calendar::CalendarError;

/// Cash-flow related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CashFlowError {
    /// The budget's month could not be partitioned.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Unknown payment source code.
    #[error("Unknown payment source: {0} (must be 1 or 2)")]
    UnknownPaymentSource(i32),

    /// Amount cannot be negative.
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    /// Amount has sub-cent digits or does not fit the stored precision.
    #[error("Amount {0} must have at most 2 decimal places and be below 1000000000000")]
    AmountOutOfRange(Decimal),

    /// Bill description is blank.
    #[error("Description cannot be empty")]
    EmptyDescription,

    /// Bill description exceeds the storage limit.
    #[error("Description exceeds {max} characters")]
    DescriptionTooLong {
        /// Maximum accepted length.
        max: usize,
    },

    /// Due date does not belong to the budget's month.
    #[error("Due date {due_date} is outside {year:04}-{month:02}")]
    DueDateOutsideMonth {
        /// Offending due date.
        due_date: NaiveDate,
        /// Budget year.
        year: i32,
        /// Budget month.
        month: u32,
    },
}
