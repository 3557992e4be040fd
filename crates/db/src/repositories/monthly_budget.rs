//! Monthly budget repository for budget database operations.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;
use weekflow_core::{CashFlowError, Month, MonthlyBudget, cashflow::validate_amount};
use weekflow_shared::types::MonthlyBudgetId;

use crate::conversion::to_domain_budget;
use crate::entities::{bills, monthly_budgets};

/// Error types for monthly budget operations.
#[derive(Debug, thiserror::Error)]
pub enum MonthlyBudgetError {
    /// Budget not found.
    #[error("Monthly budget not found: {0}")]
    NotFound(Uuid),

    /// A budget already exists for the requested month.
    #[error("Monthly budget already exists: {0}")]
    AlreadyExists(Uuid),

    /// Input rejected by a business rule.
    #[error(transparent)]
    Validation(#[from] CashFlowError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Budget together with its bills ordered by due date.
#[derive(Debug, Clone)]
pub struct BudgetWithBills {
    /// Budget record.
    pub budget: monthly_budgets::Model,
    /// Bills owned by the budget, earliest due date first.
    pub bills: Vec<bills::Model>,
}

impl BudgetWithBills {
    /// Converts the stored rows into the domain budget used for projection.
    #[must_use]
    pub fn to_domain(&self) -> MonthlyBudget {
        to_domain_budget(&self.budget, &self.bills)
    }
}

/// Monthly budget repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct MonthlyBudgetRepository {
    db: DatabaseConnection,
}

impl MonthlyBudgetRepository {
    /// Creates a new monthly budget repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an empty budget for `(year, month)` with both salaries at zero.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The month is invalid
    /// - A budget already exists for the month
    /// - Database operation fails
    pub async fn create(
        &self,
        year: i32,
        month: u32,
    ) -> Result<monthly_budgets::Model, MonthlyBudgetError> {
        let month = Month::new(year, month).map_err(CashFlowError::from)?;
        let stored_month = i32::try_from(month.month).unwrap_or_default();

        if let Some(existing) = self.find_by_month(month.year, month.month).await? {
            return Err(MonthlyBudgetError::AlreadyExists(existing.id));
        }

        let now = Utc::now().into();
        let budget = monthly_budgets::ActiveModel {
            id: Set(MonthlyBudgetId::new().into_inner()),
            year: Set(month.year),
            month: Set(stored_month),
            salary1: Set(Decimal::ZERO),
            salary2: Set(Decimal::ZERO),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = budget.insert(&self.db).await?;
        tracing::debug!(budget_id = %result.id, %month, "Monthly budget inserted");
        Ok(result)
    }

    /// Finds the budget for `(year, month)`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_month(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Option<monthly_budgets::Model>, DbErr> {
        let Ok(month) = i32::try_from(month) else {
            return Ok(None);
        };

        monthly_budgets::Entity::find()
            .filter(monthly_budgets::Column::Year.eq(year))
            .filter(monthly_budgets::Column::Month.eq(month))
            .one(&self.db)
            .await
    }

    /// Finds a budget by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<monthly_budgets::Model>, DbErr> {
        monthly_budgets::Entity::find_by_id(id).one(&self.db).await
    }

    /// Gets a budget by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the budget is not found or database query fails.
    pub async fn get(&self, id: Uuid) -> Result<monthly_budgets::Model, MonthlyBudgetError> {
        self.find_by_id(id)
            .await?
            .ok_or(MonthlyBudgetError::NotFound(id))
    }

    /// Lists all budgets, most recent month first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<monthly_budgets::Model>, DbErr> {
        monthly_budgets::Entity::find()
            .order_by_desc(monthly_budgets::Column::Year)
            .order_by_desc(monthly_budgets::Column::Month)
            .all(&self.db)
            .await
    }

    /// Sets both salaries of a budget.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either salary is negative
    /// - Budget is not found
    /// - Database operation fails
    pub async fn set_salaries(
        &self,
        id: Uuid,
        salary1: Decimal,
        salary2: Decimal,
    ) -> Result<monthly_budgets::Model, MonthlyBudgetError> {
        validate_amount(salary1)?;
        validate_amount(salary2)?;

        let budget = self.get(id).await?;

        let mut active: monthly_budgets::ActiveModel = budget.into();
        active.salary1 = Set(salary1);
        active.salary2 = Set(salary2);
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(&self.db).await?;
        Ok(updated)
    }

    /// Gets a budget with its bills ordered by due date.
    ///
    /// # Errors
    ///
    /// Returns an error if the budget is not found or database query fails.
    pub async fn get_with_bills(&self, id: Uuid) -> Result<BudgetWithBills, MonthlyBudgetError> {
        let budget = self.get(id).await?;

        let bills = budget
            .find_related(bills::Entity)
            .order_by_asc(bills::Column::DueDate)
            .order_by_asc(bills::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(BudgetWithBills { budget, bills })
    }

    /// Deletes a budget and every bill it owns.
    ///
    /// # Errors
    ///
    /// Returns an error if the budget is not found or database operation fails.
    pub async fn delete(&self, id: Uuid) -> Result<(), MonthlyBudgetError> {
        let txn = self.db.begin().await?;

        let budget = monthly_budgets::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(MonthlyBudgetError::NotFound(id))?;

        let removed = bills::Entity::delete_many()
            .filter(bills::Column::MonthlyBudgetId.eq(id))
            .exec(&txn)
            .await?;
        budget.delete(&txn).await?;

        txn.commit().await?;
        tracing::debug!(budget_id = %id, bills_removed = removed.rows_affected, "Monthly budget deleted");
        Ok(())
    }
}
