#![cfg(test)]
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

/// Fresh, migrated in-memory SQLite database per call.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_and_migrate(&DatabaseConfig::from_url("sqlite::memory:")).await?;
    Ok(db)
}
