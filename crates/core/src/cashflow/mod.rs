//! Weekly cash-flow projection.
//!
//! This module implements the budgeting logic of a month:
//! - Domain types for bills, budgets, and projections
//! - Week-by-week running balance with carry-over
//! - Per-payment-source bill summaries
//! - Input validation for bills and salaries

pub mod error;
pub mod projector;
pub mod summary;
pub mod types;
pub mod validation;

#[cfg(test)]
mod props;

pub use error::CashFlowError;
pub use projector::{CashFlowProjector, SALARY1_DEPOSIT_DAY, SALARY2_DEPOSIT_DAY};
pub use summary::{bills_by_source, bills_for_week, summarize_by_source, total_amount};
pub use types::{
    Bill, MonthlyBudget, MonthlyProjection, PaymentSource, SourceSummary, WeeklyProjection,
};
pub use validation::{
    MAX_DESCRIPTION_LEN, validate_amount, validate_description, validate_due_date,
};
