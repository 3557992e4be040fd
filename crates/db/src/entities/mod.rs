//! `SeaORM` entity definitions.

pub mod bills;
pub mod monthly_budgets;
pub mod sea_orm_active_enums;
