//! MySQL connection pool creation.

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use nv_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Create a MySQL connection pool from configuration.
///
/// The pool is created eagerly so a bad URL or unreachable database
/// fails at startup rather than on the first request.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .max_lifetime(Duration::from_secs(config.max_lifetime))
        .connect(&config.url)
        .await
        .map_err(|e| {
            InfrastructureError::Database(format!("Failed to connect to database: {}", e))
        })?;

    tracing::info!(
        max_connections = config.max_connections,
        "Database connection pool created"
    );

    Ok(pool)
}
