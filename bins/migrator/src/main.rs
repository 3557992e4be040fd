//! Database migration runner for Weekflow.
//!
//! Usage:
//!   migrator up      - Run all pending migrations (default)
//!   migrator down    - Rollback last migration
//!   migrator status  - Show migration status
//!   migrator fresh   - Drop all tables and re-run migrations
//!
//! The database URL comes from the same configuration as the server.

use anyhow::{Context, bail};
use sea_orm_migration::MigratorTrait;
use tracing::info;
use weekflow_db::{connect, migration::Migrator};
use weekflow_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weekflow=info,sea_orm_migration=info".into()),
        )
        .init();

    let command = std::env::args().nth(1).unwrap_or_else(|| "up".to_string());

    let config = AppConfig::load().context("Failed to load configuration")?;
    let db = connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;

    match command.as_str() {
        "up" => Migrator::up(&db, None).await?,
        "down" => Migrator::down(&db, Some(1)).await?,
        "status" => Migrator::status(&db).await?,
        "fresh" => Migrator::fresh(&db).await?,
        other => bail!("Unknown command '{other}', expected up, down, status, or fresh"),
    }

    info!(command = %command, "Migration command finished");
    Ok(())
}
