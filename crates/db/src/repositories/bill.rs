//! Bill repository for bill database operations.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;
use weekflow_core::{
    CashFlowError, PaymentSource,
    cashflow::{validate_amount, validate_description, validate_due_date},
};
use weekflow_shared::types::BillId;

use crate::entities::{bills, monthly_budgets};

/// Error types for bill operations.
#[derive(Debug, thiserror::Error)]
pub enum BillError {
    /// Bill not found.
    #[error("Bill not found: {0}")]
    NotFound(Uuid),

    /// Owning budget not found.
    #[error("Monthly budget not found: {0}")]
    BudgetNotFound(Uuid),

    /// Input rejected by a business rule.
    #[error(transparent)]
    Validation(#[from] CashFlowError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a bill.
#[derive(Debug, Clone)]
pub struct CreateBillInput {
    /// Owning budget ID.
    pub monthly_budget_id: Uuid,
    /// What the bill is for.
    pub description: String,
    /// Amount due.
    pub amount: Decimal,
    /// Due date, inside the budget's month.
    pub due_date: NaiveDate,
    /// Salary that pays the bill.
    pub payment_source: PaymentSource,
}

/// Input for updating a bill. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateBillInput {
    /// New description.
    pub description: Option<String>,
    /// New amount.
    pub amount: Option<Decimal>,
    /// New due date.
    pub due_date: Option<NaiveDate>,
}

impl UpdateBillInput {
    /// Returns true if the input changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.description.is_none() && self.amount.is_none() && self.due_date.is_none()
    }
}

/// Bill repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct BillRepository {
    db: DatabaseConnection,
}

impl BillRepository {
    /// Creates a new bill repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a bill under an existing budget.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Description, amount, or due date is invalid
    /// - Budget does not exist
    /// - Database operation fails
    pub async fn create(&self, input: CreateBillInput) -> Result<bills::Model, BillError> {
        validate_description(&input.description)?;
        validate_amount(input.amount)?;

        let budget = monthly_budgets::Entity::find_by_id(input.monthly_budget_id)
            .one(&self.db)
            .await?
            .ok_or(BillError::BudgetNotFound(input.monthly_budget_id))?;
        check_due_date(&budget, input.due_date)?;

        let now = Utc::now().into();
        let bill = bills::ActiveModel {
            id: Set(BillId::new().into_inner()),
            monthly_budget_id: Set(budget.id),
            description: Set(input.description),
            amount: Set(input.amount),
            due_date: Set(input.due_date),
            payment_source: Set(input.payment_source.into()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = bill.insert(&self.db).await?;
        Ok(result)
    }

    /// Finds a bill by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<bills::Model>, DbErr> {
        bills::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists the bills of a budget, earliest due date first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_budget(&self, monthly_budget_id: Uuid) -> Result<Vec<bills::Model>, DbErr> {
        bills::Entity::find()
            .filter(bills::Column::MonthlyBudgetId.eq(monthly_budget_id))
            .order_by_asc(bills::Column::DueDate)
            .order_by_asc(bills::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Applies a partial update to a bill.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Bill is not found
    /// - A provided field is invalid
    /// - Database operation fails
    pub async fn update(&self, id: Uuid, input: UpdateBillInput) -> Result<bills::Model, BillError> {
        let bill = self.find_by_id(id).await?.ok_or(BillError::NotFound(id))?;

        if let Some(description) = &input.description {
            validate_description(description)?;
        }
        if let Some(amount) = input.amount {
            validate_amount(amount)?;
        }
        if let Some(due_date) = input.due_date {
            let budget = bill
                .find_related(monthly_budgets::Entity)
                .one(&self.db)
                .await?
                .ok_or(BillError::BudgetNotFound(bill.monthly_budget_id))?;
            check_due_date(&budget, due_date)?;
        }

        if input.is_empty() {
            return Ok(bill);
        }

        let mut active: bills::ActiveModel = bill.into();
        if let Some(description) = input.description {
            active.description = Set(description);
        }
        if let Some(amount) = input.amount {
            active.amount = Set(amount);
        }
        if let Some(due_date) = input.due_date {
            active.due_date = Set(due_date);
        }
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(&self.db).await?;
        Ok(updated)
    }

    /// Deletes a bill.
    ///
    /// # Errors
    ///
    /// Returns an error if the bill is not found or database operation fails.
    pub async fn delete(&self, id: Uuid) -> Result<(), BillError> {
        let result = bills::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(BillError::NotFound(id));
        }
        Ok(())
    }
}

/// Rejects due dates outside the budget's month.
fn check_due_date(budget: &monthly_budgets::Model, due_date: NaiveDate) -> Result<(), CashFlowError> {
    let month = u32::try_from(budget.month).unwrap_or_default();
    validate_due_date(due_date, budget.year, month)
}
