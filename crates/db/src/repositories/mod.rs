//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod bill;
pub mod monthly_budget;

pub use bill::{BillError, BillRepository, CreateBillInput, UpdateBillInput};
pub use monthly_budget::{BudgetWithBills, MonthlyBudgetError, MonthlyBudgetRepository};
