//! Week-by-week running balance.

use rust_decimal::Decimal;

use super::error::CashFlowError;
use super::summary::{bills_for_week, summarize_by_source, total_amount};
use super::types::{
    Bill, MonthlyBudget, MonthlyProjection, PaymentSource, SourceSummary, WeeklyProjection,
};
use crate::calendar::{Week, partition_month};

/// Day of month the first salary is deposited.
pub const SALARY1_DEPOSIT_DAY: u32 = 5;

/// Day of month the second salary is deposited.
pub const SALARY2_DEPOSIT_DAY: u32 = 20;

/// Projects weekly liquidity from salaries and dated bills.
pub struct CashFlowProjector;

impl CashFlowProjector {
    /// Projects a sequence of weeks, carrying each week's balance into the next.
    ///
    /// A salary is added to the opening balance of the week whose day range
    /// contains its deposit day. A deficit is carried forward unchanged while
    /// the week's closing balance is shown as zero.
    #[must_use]
    pub fn project_weeks(
        weeks: &[Week],
        salary1: Decimal,
        salary2: Decimal,
        bills: &[Bill],
    ) -> Vec<WeeklyProjection> {
        let mut running_balance = Decimal::ZERO;

        weeks
            .iter()
            .map(|week| {
                let projection =
                    Self::project_week(week, running_balance, salary1, salary2, bills);
                running_balance = projection.carry_over;
                projection
            })
            .collect()
    }

    /// Projects a single week given the balance carried from the previous one.
    #[must_use]
    pub fn project_week(
        week: &Week,
        carried: Decimal,
        salary1: Decimal,
        salary2: Decimal,
        bills: &[Bill],
    ) -> WeeklyProjection {
        let mut opening_balance = carried;
        if week.contains_day(SALARY1_DEPOSIT_DAY) {
            opening_balance += salary1;
        }
        if week.contains_day(SALARY2_DEPOSIT_DAY) {
            opening_balance += salary2;
        }

        let bills_due = bills_for_week(bills, week);
        let total_due = total_amount(&bills_due);
        let tentative = opening_balance - total_due;

        WeeklyProjection {
            week_index: week.index,
            days: week.days.clone(),
            opening_balance,
            bills_due,
            total_due,
            closing_balance: tentative.max(Decimal::ZERO),
            carry_over: tentative,
        }
    }

    /// Partitions the budget's month, projects every week, and summarises
    /// bills per payment source.
    ///
    /// # Errors
    ///
    /// Returns `CashFlowError::Calendar` if the budget's month is invalid.
    pub fn project_month(budget: &MonthlyBudget) -> Result<MonthlyProjection, CashFlowError> {
        let weeks = partition_month(budget.year, budget.month)?;

        Ok(MonthlyProjection {
            weeks: Self::project_weeks(
                &weeks,
                budget.salary(PaymentSource::Salary1),
                budget.salary(PaymentSource::Salary2),
                &budget.bills,
            ),
            salary1: Self::summarize(budget, PaymentSource::Salary1),
            salary2: Self::summarize(budget, PaymentSource::Salary2),
        })
    }

    fn summarize(budget: &MonthlyBudget, source: PaymentSource) -> SourceSummary {
        summarize_by_source(budget.salary(source), &budget.bills, source)
    }
}
