//! Shared setup for repository integration tests.

use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use weekflow_db::migration::Migrator;

/// Opens a fresh in-memory database with the schema applied.
pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}
