//! Core business logic for Weekflow.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `calendar` - Splitting a month into Monday-first calendar weeks
//! - `cashflow` - Weekly running balance, bill summaries, and input validation

pub mod calendar;
pub mod cashflow;

pub use calendar::{CalendarError, Month, Week, partition_month};
pub use cashflow::{
    Bill, CashFlowError, CashFlowProjector, MonthlyBudget, MonthlyProjection, PaymentSource,
    SourceSummary, WeeklyProjection,
};
