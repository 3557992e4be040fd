//! Database seeder for Weekflow development and testing.
//!
//! Seeds a budget for the current month with both salaries and a handful of
//! bills spread across the weeks, so the projection has something to show.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use weekflow_core::PaymentSource;
use weekflow_db::{
    BillRepository, MonthlyBudgetRepository,
    repositories::{CreateBillInput, MonthlyBudgetError},
};
use weekflow_shared::AppConfig;

/// Demo bills: (description, amount in cents, day of month, payment source).
const DEMO_BILLS: [(&str, i64, u32, PaymentSource); 6] = [
    ("Rent", 120_000, 1, PaymentSource::Salary1),
    ("Electricity", 8_550, 8, PaymentSource::Salary1),
    ("Internet", 4_990, 10, PaymentSource::Salary1),
    ("Groceries", 35_000, 15, PaymentSource::Salary1),
    ("Car insurance", 16_025, 22, PaymentSource::Salary2),
    ("Phone", 3_500, 27, PaymentSource::Salary2),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    println!("Connecting to database...");
    let db = weekflow_db::connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;

    let today = Utc::now().date_naive();
    let budgets = MonthlyBudgetRepository::new(db.clone());
    let bills = BillRepository::new(db);

    println!("Seeding budget for {}-{:02}...", today.year(), today.month());
    let budget = match budgets.create(today.year(), today.month()).await {
        Ok(budget) => budget,
        Err(MonthlyBudgetError::AlreadyExists(id)) => {
            println!("  Budget already exists ({id}), skipping...");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    budgets
        .set_salaries(budget.id, Decimal::new(300_000, 2), Decimal::new(150_000, 2))
        .await?;
    println!("  Created budget {} with salaries 3000.00 / 1500.00", budget.id);

    println!("Seeding bills...");
    for (description, cents, day, payment_source) in DEMO_BILLS {
        let due_date = NaiveDate::from_ymd_opt(today.year(), today.month(), day)
            .with_context(|| format!("Day {day} is not in the current month"))?;

        bills
            .create(CreateBillInput {
                monthly_budget_id: budget.id,
                description: description.to_string(),
                amount: Decimal::new(cents, 2),
                due_date,
                payment_source,
            })
            .await?;
        println!("  Created bill: {description}");
    }

    println!("Seeding complete!");
    Ok(())
}
