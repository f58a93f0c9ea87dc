//! Database layer for pkucat.
//!
//! Entities for the feed schema, the migrations that create it, and one
//! repository per table.

pub mod entities;
pub mod migrations;
pub mod repositories;
pub mod test_utils;

use pkucat_common::{AppError, Config};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::log::LevelFilter;

/// Initialize database connection.
pub async fn init(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database.url);

    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(config.database.sqlx_logging)
        .sqlx_logging_level(LevelFilter::Debug);

    Database::connect(opt)
        .await
        .map_err(|e| AppError::Database(e.to_string()))
}

/// Run pending migrations.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), AppError> {
    migrations::Migrator::up(db, None)
        .await
        .map_err(|e| AppError::Database(e.to_string()))
}

/// Revert the most recently applied migration.
pub async fn rollback(db: &DatabaseConnection) -> Result<(), AppError> {
    migrations::Migrator::down(db, Some(1))
        .await
        .map_err(|e| AppError::Database(e.to_string()))
}

/// Names of applied and pending migrations, in order.
pub async fn migration_status(
    db: &DatabaseConnection,
) -> Result<(Vec<String>, Vec<String>), AppError> {
    let applied = migrations::Migrator::get_applied_migrations(db)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    let pending = migrations::Migrator::get_pending_migrations(db)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok((
        applied.iter().map(|m| m.name().to_string()).collect(),
        pending.iter().map(|m| m.name().to_string()).collect(),
    ))
}
