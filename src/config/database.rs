use anyhow::{Context, Result};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::env;
use std::time::Duration;

use super::env_or;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
}

impl DatabaseConfig {
    /// `DATABASE_URL` is required; pool tuning falls back to defaults.
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .context("DATABASE_URL must be set to a PostgreSQL connection string")?;

        let max_connections = env_or("DB_MAX_CONNECTIONS", 10)?;
        let min_connections = env_or("DB_MIN_CONNECTIONS", 1)?;
        let connect_timeout_secs = env_or("DB_CONNECT_TIMEOUT", 30)?;
        let idle_timeout_secs = env_or("DB_IDLE_TIMEOUT", 600)?;

        Ok(DatabaseConfig {
            database_url,
            max_connections,
            min_connections,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            idle_timeout: Duration::from_secs(idle_timeout_secs),
        })
    }

    pub async fn create_pool(&self) -> Result<PgPool> {
        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.connect_timeout)
            .idle_timeout(Some(self.idle_timeout))
            .connect(&self.database_url)
            .await
            .context("failed to connect to the database")?;

        Ok(pool)
    }
}

/// Create the `members` and `workout_sessions` tables if they are absent.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("failed to apply database migrations")?;
    Ok(())
}
