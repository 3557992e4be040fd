//! Conversion of stored rows into core domain types.

use weekflow_core::{Bill, MonthlyBudget, PaymentSource};
use weekflow_shared::types::{BillId, MonthlyBudgetId};

use crate::entities::{bills, monthly_budgets, sea_orm_active_enums::PaymentSource as DbPaymentSource};

impl From<DbPaymentSource> for PaymentSource {
    fn from(source: DbPaymentSource) -> Self {
        match source {
            DbPaymentSource::Salary1 => Self::Salary1,
            DbPaymentSource::Salary2 => Self::Salary2,
        }
    }
}

impl From<PaymentSource> for DbPaymentSource {
    fn from(source: PaymentSource) -> Self {
        match source {
            PaymentSource::Salary1 => Self::Salary1,
            PaymentSource::Salary2 => Self::Salary2,
        }
    }
}

impl From<&bills::Model> for Bill {
    fn from(model: &bills::Model) -> Self {
        Self {
            id: BillId::from_uuid(model.id),
            description: model.description.clone(),
            amount: model.amount,
            due_date: model.due_date,
            payment_source: model.payment_source.into(),
        }
    }
}

/// Builds the domain budget from its stored row and bills.
///
/// A stored month that does not fit `u32` becomes 0, which projection
/// rejects as an invalid month.
#[must_use]
pub fn to_domain_budget(budget: &monthly_budgets::Model, bills: &[bills::Model]) -> MonthlyBudget {
    MonthlyBudget {
        id: MonthlyBudgetId::from_uuid(budget.id),
        year: budget.year,
        month: u32::try_from(budget.month).unwrap_or(0),
        salary1: budget.salary1,
        salary2: budget.salary2,
        bills: bills.iter().map(Bill::from).collect(),
    }
}
