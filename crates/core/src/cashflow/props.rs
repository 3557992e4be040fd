//! Property-based tests for the weekly projection.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use weekflow_shared::types::{BillId, MonthlyBudgetId};

use super::projector::{CashFlowProjector, SALARY1_DEPOSIT_DAY, SALARY2_DEPOSIT_DAY};
use super::summary::total_amount;
use super::types::{Bill, MonthlyBudget, PaymentSource};
use crate::calendar::{days_in_month, partition_month};

/// Strategy to generate non-negative amounts (0.00 to 100,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn payment_source() -> impl Strategy<Value = PaymentSource> {
    prop_oneof![Just(PaymentSource::Salary1), Just(PaymentSource::Salary2)]
}

/// Strategy to generate a budget whose bills all fall inside its month.
fn budget() -> impl Strategy<Value = MonthlyBudget> {
    (1990i32..2100, 1u32..=12, amount(), amount())
        .prop_flat_map(|(year, month, salary1, salary2)| {
            let days = days_in_month(year, month).unwrap();
            let bills = prop::collection::vec((amount(), 1..=days, payment_source()), 0..12);
            (Just((year, month, salary1, salary2)), bills)
        })
        .prop_map(|((year, month, salary1, salary2), raw_bills)| MonthlyBudget {
            id: MonthlyBudgetId::new(),
            year,
            month,
            salary1,
            salary2,
            bills: raw_bills
                .into_iter()
                .map(|(amount, day, payment_source)| Bill {
                    id: BillId::new(),
                    description: format!("bill {day}"),
                    amount,
                    due_date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
                    payment_source,
                })
                .collect(),
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Closing balance is never negative and equals the clamped carry-over.
    #[test]
    fn prop_closing_balance_is_clamped(budget in budget()) {
        let projection = CashFlowProjector::project_month(&budget).unwrap();

        for week in &projection.weeks {
            prop_assert!(week.closing_balance >= Decimal::ZERO);
            prop_assert_eq!(week.closing_balance, week.carry_over.max(Decimal::ZERO));
            prop_assert_eq!(week.carry_over, week.opening_balance - week.total_due);
            prop_assert_eq!(week.total_due, total_amount(&week.bills_due));
        }
    }

    /// Each week's opening balance is the previous carry-over plus that week's deposits.
    #[test]
    fn prop_carry_over_feeds_next_week(budget in budget()) {
        let weeks = partition_month(budget.year, budget.month).unwrap();
        let projection = CashFlowProjector::project_weeks(
            &weeks, budget.salary1, budget.salary2, &budget.bills,
        );

        let mut carried = Decimal::ZERO;
        for (week, projected) in weeks.iter().zip(&projection) {
            let mut deposits = Decimal::ZERO;
            if week.contains_day(SALARY1_DEPOSIT_DAY) {
                deposits += budget.salary1;
            }
            if week.contains_day(SALARY2_DEPOSIT_DAY) {
                deposits += budget.salary2;
            }
            prop_assert_eq!(projected.opening_balance - deposits, carried);
            carried = projected.carry_over;
        }
    }

    /// Every bill is due in exactly one week and the month's money is conserved.
    #[test]
    fn prop_bills_and_money_are_conserved(budget in budget()) {
        let projection = CashFlowProjector::project_month(&budget).unwrap();

        let selected: usize = projection.weeks.iter().map(|w| w.bills_due.len()).sum();
        prop_assert_eq!(selected, budget.bills.len());

        let billed = total_amount(&budget.bills);
        let last = projection.weeks.last().unwrap();
        prop_assert_eq!(last.carry_over, budget.salary1 + budget.salary2 - billed);
        prop_assert_eq!(
            projection.salary1.total_billed + projection.salary2.total_billed,
            billed
        );
    }

    /// Projecting the same budget twice gives the same result.
    #[test]
    fn prop_projection_is_idempotent(budget in budget()) {
        prop_assert_eq!(
            CashFlowProjector::project_month(&budget).unwrap(),
            CashFlowProjector::project_month(&budget).unwrap()
        );
    }
}
