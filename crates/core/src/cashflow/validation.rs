//! Business rule validation for bills and salaries.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::error::CashFlowError;

/// Longest accepted bill description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Decimal places kept for stored amounts.
const AMOUNT_SCALE: u32 = 2;

/// Integer digits kept for stored amounts, matching `NUMERIC(14, 2)`.
const AMOUNT_INTEGER_DIGITS: u32 = 12;

/// Validates a salary or bill amount.
///
/// Amounts must be non-negative, have at most two significant decimal
/// places, and stay below `10^12`.
///
/// # Errors
///
/// Returns `CashFlowError::NegativeAmount` if `amount < 0`, or
/// `CashFlowError::AmountOutOfRange` if it does not fit the stored precision.
pub fn validate_amount(amount: Decimal) -> Result<(), CashFlowError> {
    if amount < Decimal::ZERO {
        return Err(CashFlowError::NegativeAmount(amount));
    }
    // Trailing zeros do not count: 1.500 is stored as 1.50.
    if amount.normalize().scale() > AMOUNT_SCALE {
        return Err(CashFlowError::AmountOutOfRange(amount));
    }
    if amount >= Decimal::from(10_u64.pow(AMOUNT_INTEGER_DIGITS)) {
        return Err(CashFlowError::AmountOutOfRange(amount));
    }
    Ok(())
}

/// Validates a bill description.
///
/// # Errors
///
/// Returns an error if the description is blank or too long.
pub fn validate_description(description: &str) -> Result<(), CashFlowError> {
    if description.trim().is_empty() {
        return Err(CashFlowError::EmptyDescription);
    }
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(CashFlowError::DescriptionTooLong {
            max: MAX_DESCRIPTION_LEN,
        });
    }
    Ok(())
}

/// Validates that a bill's due date belongs to the budget's month.
///
/// # Errors
///
/// Returns `CashFlowError::DueDateOutsideMonth` otherwise.
pub fn validate_due_date(due_date: NaiveDate, year: i32, month: u32) -> Result<(), CashFlowError> {
    if due_date.year() != year || due_date.month() != month {
        return Err(CashFlowError::DueDateOutsideMonth {
            due_date,
            year,
            month,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_validation() {
        assert!(validate_amount(dec!(0)).is_ok());
        assert!(validate_amount(dec!(12.34)).is_ok());
        assert_eq!(
            validate_amount(dec!(-0.01)),
            Err(CashFlowError::NegativeAmount(dec!(-0.01)))
        );
    }

    #[rstest]
    #[case(dec!(0.005))]
    #[case(dec!(19.999))]
    #[case(dec!(1000000000000))]
    #[case(dec!(1000000000000000))]
    fn test_amount_outside_stored_precision(#[case] amount: Decimal) {
        assert_eq!(
            validate_amount(amount),
            Err(CashFlowError::AmountOutOfRange(amount))
        );
    }

    #[rstest]
    #[case(dec!(1.500))]
    #[case(dec!(0.01))]
    #[case(dec!(999999999999.99))]
    fn test_amount_within_stored_precision(#[case] amount: Decimal) {
        assert!(validate_amount(amount).is_ok());
    }

    #[test]
    fn test_description_validation() {
        assert!(validate_description("Internet").is_ok());
        assert_eq!(
            validate_description("   "),
            Err(CashFlowError::EmptyDescription)
        );
        assert!(validate_description(&"x".repeat(MAX_DESCRIPTION_LEN)).is_ok());
        assert_eq!(
            validate_description(&"x".repeat(MAX_DESCRIPTION_LEN + 1)),
            Err(CashFlowError::DescriptionTooLong {
                max: MAX_DESCRIPTION_LEN
            })
        );
    }

    #[test]
    fn test_due_date_validation() {
        let in_month = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        assert!(validate_due_date(in_month, 2024, 3).is_ok());

        let next_month = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        assert!(matches!(
            validate_due_date(next_month, 2024, 3),
            Err(CashFlowError::DueDateOutsideMonth { month: 3, .. })
        ));

        let other_year = NaiveDate::from_ymd_opt(2023, 3, 15).unwrap();
        assert!(validate_due_date(other_year, 2024, 3).is_err());
    }
}
