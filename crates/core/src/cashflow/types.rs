//! Cash-flow data types.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use weekflow_shared::types::{BillId, MonthlyBudgetId};

use super::error::CashFlowError;

/// Which of the two monthly salaries pays a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum PaymentSource {
    /// First salary, deposited on day 5.
    Salary1,
    /// Second salary, deposited on day 20.
    Salary2,
}

impl PaymentSource {
    /// Returns the numeric code used on the wire and in storage.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Salary1 => 1,
            Self::Salary2 => 2,
        }
    }
}

impl TryFrom<i32> for PaymentSource {
    type Error = CashFlowError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Salary1),
            2 => Ok(Self::Salary2),
            other => Err(CashFlowError::UnknownPaymentSource(other)),
        }
    }
}

impl From<PaymentSource> for i32 {
    fn from(source: PaymentSource) -> Self {
        source.code()
    }
}

/// A dated expense paid from one of the salaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    /// Bill ID.
    pub id: BillId,
    /// What the bill is for.
    pub description: String,
    /// Amount due (non-negative).
    pub amount: Decimal,
    /// Due date, within the budget's month.
    pub due_date: NaiveDate,
    /// Salary that pays this bill.
    pub payment_source: PaymentSource,
}

impl Bill {
    /// Day of month the bill is due.
    #[must_use]
    pub fn due_day(&self) -> u32 {
        self.due_date.day()
    }
}

/// A month's income and bills, as loaded from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBudget {
    /// Monthly budget ID.
    pub id: MonthlyBudgetId,
    /// Calendar year.
    pub year: i32,
    /// Month number (1-12).
    pub month: u32,
    /// First salary amount.
    pub salary1: Decimal,
    /// Second salary amount.
    pub salary2: Decimal,
    /// Bills owned by this budget.
    pub bills: Vec<Bill>,
}

impl MonthlyBudget {
    /// Returns the salary configured for `source`.
    #[must_use]
    pub const fn salary(&self, source: PaymentSource) -> Decimal {
        match source {
            PaymentSource::Salary1 => self.salary1,
            PaymentSource::Salary2 => self.salary2,
        }
    }
}

/// Projected cash position for one calendar week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyProjection {
    /// 1-based week index.
    pub week_index: u32,
    /// Days of the month in this week.
    pub days: Vec<u32>,
    /// Carried balance plus salaries deposited this week.
    pub opening_balance: Decimal,
    /// Bills due this week.
    pub bills_due: Vec<Bill>,
    /// Sum of `bills_due` amounts.
    pub total_due: Decimal,
    /// Money left at the end of the week, never below zero.
    pub closing_balance: Decimal,
    /// Unclamped balance passed to the next week; may be negative.
    pub carry_over: Decimal,
}

impl WeeklyProjection {
    /// Returns true if bills exceeded the available money this week.
    #[must_use]
    pub fn is_short(&self) -> bool {
        self.carry_over < Decimal::ZERO
    }
}

/// Bill totals for one payment source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSummary {
    /// Payment source summarised.
    pub payment_source: PaymentSource,
    /// Salary amount for the source.
    pub salary: Decimal,
    /// Sum of bills paid from the source.
    pub total_billed: Decimal,
    /// `salary - total_billed`; negative when over-committed.
    pub remaining: Decimal,
}

/// Full projection of a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyProjection {
    /// One entry per calendar week, in order.
    pub weeks: Vec<WeeklyProjection>,
    /// Summary of bills paid by the first salary.
    pub salary1: SourceSummary,
    /// Summary of bills paid by the second salary.
    pub salary2: SourceSummary,
}
