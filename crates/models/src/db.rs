use std::time::Duration;

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::errors::ModelError;

/// Open a pool from `cfg`.
///
/// In-memory SQLite lives per connection, so such URLs get exactly one pooled connection.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, ModelError> {
    let (max, min) = if cfg.is_sqlite_memory() {
        (1, 1)
    } else {
        (cfg.max_connections, cfg.min_connections.min(cfg.max_connections))
    };
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(max)
        .min_connections(min)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    if !cfg.is_sqlite_memory() {
        opt.idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }
    Ok(Database::connect(opt).await?)
}

/// Connect and bring the schema up to date.
pub async fn connect_and_migrate(cfg: &DatabaseConfig) -> Result<DatabaseConnection, ModelError> {
    let db = connect_with_config(cfg).await?;
    migration::Migrator::up(&db, None).await?;
    info!(sqlite_memory = cfg.is_sqlite_memory(), "database schema up to date");
    Ok(db)
}

