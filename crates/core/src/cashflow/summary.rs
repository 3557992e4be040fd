//! Pure filters and aggregates over bill sets.

use rust_decimal::Decimal;

use super::types::{Bill, PaymentSource, SourceSummary};
use crate::calendar::Week;

/// Bills paid from `source`, in input order.
#[must_use]
pub fn bills_by_source(bills: &[Bill], source: PaymentSource) -> Vec<Bill> {
    bills
        .iter()
        .filter(|bill| bill.payment_source == source)
        .cloned()
        .collect()
}

/// Bills whose due day lies within the week's day range, in input order.
///
/// Only the day of month is compared; bills are assumed to belong to the
/// week's month.
#[must_use]
pub fn bills_for_week(bills: &[Bill], week: &Week) -> Vec<Bill> {
    bills
        .iter()
        .filter(|bill| week.contains_day(bill.due_day()))
        .cloned()
        .collect()
}

/// Sum of bill amounts.
#[must_use]
pub fn total_amount(bills: &[Bill]) -> Decimal {
    bills.iter().map(|bill| bill.amount).sum()
}

/// Totals the bills paid from `source` against its salary.
#[must_use]
pub fn summarize_by_source(salary: Decimal, bills: &[Bill], source: PaymentSource) -> SourceSummary {
    let total_billed = bills
        .iter()
        .filter(|bill| bill.payment_source == source)
        .map(|bill| bill.amount)
        .sum::<Decimal>();

    SourceSummary {
        payment_source: source,
        salary,
        total_billed,
        remaining: salary - total_billed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use weekflow_shared::types::BillId;

    fn bill(description: &str, amount: Decimal, day: u32, source: PaymentSource) -> Bill {
        Bill {
            id: BillId::new(),
            description: description.to_string(),
            amount,
            due_date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            payment_source: source,
        }
    }

    #[test]
    fn test_bills_by_source_preserves_order() {
        let bills = vec![
            bill("rent", dec!(900), 1, PaymentSource::Salary1),
            bill("gym", dec!(40), 3, PaymentSource::Salary2),
            bill("power", dec!(120), 10, PaymentSource::Salary1),
        ];

        let first: Vec<_> = bills_by_source(&bills, PaymentSource::Salary1)
            .into_iter()
            .map(|b| b.description)
            .collect();
        assert_eq!(first, vec!["rent", "power"]);
        assert_eq!(bills_by_source(&bills, PaymentSource::Salary2).len(), 1);
    }

    #[test]
    fn test_bills_for_week_uses_inclusive_bounds() {
        let week = Week::from_days(2, (4..=10).collect()).unwrap();
        let bills = vec![
            bill("before", dec!(1), 3, PaymentSource::Salary1),
            bill("first", dec!(2), 4, PaymentSource::Salary1),
            bill("last", dec!(3), 10, PaymentSource::Salary2),
            bill("after", dec!(4), 11, PaymentSource::Salary2),
        ];

        let due = bills_for_week(&bills, &week);
        assert_eq!(due.len(), 2);
        assert_eq!(total_amount(&due), dec!(5));
    }

    #[test]
    fn test_total_amount_of_nothing_is_zero() {
        assert_eq!(total_amount(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_summarize_by_source() {
        let bills = vec![
            bill("rent", dec!(900.50), 1, PaymentSource::Salary1),
            bill("gym", dec!(40), 3, PaymentSource::Salary2),
            bill("power", dec!(120.25), 10, PaymentSource::Salary1),
        ];

        let summary = summarize_by_source(dec!(1000), &bills, PaymentSource::Salary1);
        assert_eq!(summary.total_billed, dec!(1020.75));
        assert_eq!(summary.remaining, dec!(-20.75));

        let summary = summarize_by_source(dec!(0), &bills, PaymentSource::Salary2);
        assert_eq!(summary.total_billed, dec!(40));
        assert_eq!(summary.remaining, dec!(-40));
    }
}
