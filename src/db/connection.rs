//! Database connection pool and utility functions.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Schema,
    Statement,
};
use std::time::Duration;
use tracing::log::LevelFilter;

use crate::config::DatabaseConfig;
use crate::entities::prelude::*;
use crate::error::{AppError, Result};

/// Create a new database connection with configured pool settings.
pub async fn connect(config: &DatabaseConfig) -> std::result::Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(&config.url);
    opt.max_connections(config.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .sqlx_logging_level(LevelFilter::Debug);

    Database::connect(opt).await
}

/// Connect, verify the server answers, and create missing tables.
///
/// Failure is returned to the caller; nothing here terminates the process.
pub async fn bootstrap(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    if config.url.trim().is_empty() {
        return Err(AppError::config("No database URL configured"));
    }

    let db = connect(config).await?;
    db.ping()
        .await
        .map_err(|e| AppError::DatabaseUnavailable(e.to_string()))?;
    ensure_schema(&db).await?;

    Ok(db)
}

/// Create the supplier and settings tables if they do not exist.
pub async fn ensure_schema(db: &DatabaseConnection) -> std::result::Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut suppliers = schema.create_table_from_entity(Suppliers);
    suppliers.if_not_exists();
    db.execute(backend.build(&suppliers)).await?;

    let mut settings = schema.create_table_from_entity(CompanySettings);
    settings.if_not_exists();
    db.execute(backend.build(&settings)).await?;

    Ok(())
}

/// Test database connection by executing a simple query.
pub async fn test_connection(db: &DatabaseConnection) -> std::result::Result<(), DbErr> {
    db.execute_unprepared("SELECT 1").await?;
    Ok(())
}

/// Test connection settings without keeping the connection.
pub async fn test_connection_config(config: &DatabaseConfig) -> std::result::Result<(), String> {
    let db = connect(config).await.map_err(|e| e.to_string())?;
    test_connection(&db).await.map_err(|e| e.to_string())
}

/// Get PostgreSQL version string.
pub async fn get_version(db: &DatabaseConnection) -> std::result::Result<String, DbErr> {
    let result = db
        .query_one(Statement::from_string(
            sea_orm::DatabaseBackend::Postgres,
            "SELECT version()".to_owned(),
        ))
        .await?;

    match result {
        Some(row) => {
            let version: String = row.try_get("", "version")?;
            Ok(version)
        }
        None => Ok("Unknown".to_owned()),
    }
}

/// Get record counts for all tables.
pub async fn get_table_counts(db: &DatabaseConnection) -> std::result::Result<TableCounts, DbErr> {
    let suppliers = Suppliers::find().count(db).await?;
    let settings_rows = CompanySettings::find().count(db).await?;

    Ok(TableCounts {
        suppliers,
        settings_rows,
    })
}

/// Table record counts.
#[derive(Debug, Clone)]
pub struct TableCounts {
    pub suppliers: u64,
    pub settings_rows: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bootstrap_without_url_fails_fast() {
        let config = DatabaseConfig::default();
        let err = bootstrap(&config).await.unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
