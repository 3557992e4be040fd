//! `SeaORM` Entity for bills table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::PaymentSource;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "bills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub monthly_budget_id: Uuid,
    pub description: String,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub amount: Decimal,
    pub due_date: Date,
    pub payment_source: PaymentSource,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::monthly_budgets::Entity",
        from = "Column::MonthlyBudgetId",
        to = "super::monthly_budgets::Column::Id",
        on_delete = "Cascade"
    )]
    MonthlyBudgets,
}

impl Related<super::monthly_budgets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MonthlyBudgets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
