//! Initial schema migration.
//!
//! Creates the complete schema for Weekflow:
//!
//! - `monthly_budgets`: one row per (year, month) with both salaries
//! - `bills`: dated expenses owned by a monthly budget

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum MonthlyBudgets {
    Table,
    Id,
    Year,
    Month,
    Salary1,
    Salary2,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Bills {
    Table,
    Id,
    MonthlyBudgetId,
    Description,
    Amount,
    DueDate,
    PaymentSource,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MonthlyBudgets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MonthlyBudgets::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MonthlyBudgets::Year).integer().not_null())
                    .col(ColumnDef::new(MonthlyBudgets::Month).integer().not_null())
                    .col(
                        ColumnDef::new(MonthlyBudgets::Salary1)
                            .decimal_len(14, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MonthlyBudgets::Salary2)
                            .decimal_len(14, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MonthlyBudgets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(MonthlyBudgets::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // One budget per calendar month
        manager
            .create_index(
                Index::create()
                    .name("idx-monthly_budgets-year-month-unique")
                    .table(MonthlyBudgets::Table)
                    .col(MonthlyBudgets::Year)
                    .col(MonthlyBudgets::Month)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Bills::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Bills::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Bills::MonthlyBudgetId).uuid().not_null())
                    .col(ColumnDef::new(Bills::Description).string_len(200).not_null())
                    .col(ColumnDef::new(Bills::Amount).decimal_len(14, 2).not_null())
                    .col(ColumnDef::new(Bills::DueDate).date().not_null())
                    .col(ColumnDef::new(Bills::PaymentSource).integer().not_null())
                    .col(
                        ColumnDef::new(Bills::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Bills::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-bills-monthly_budget_id")
                            .from(Bills::Table, Bills::MonthlyBudgetId)
                            .to(MonthlyBudgets::Table, MonthlyBudgets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Bills are always read per budget in due-date order
        manager
            .create_index(
                Index::create()
                    .name("idx-bills-monthly_budget_id-due_date")
                    .table(Bills::Table)
                    .col(Bills::MonthlyBudgetId)
                    .col(Bills::DueDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bills::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(MonthlyBudgets::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}
