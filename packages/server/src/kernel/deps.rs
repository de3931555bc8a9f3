//! Server dependencies handed to every access-layer operation
//!
//! The pool is constructed once by the binary (or the test harness) and
//! passed in explicitly; nothing reaches for a global connection.

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;

/// Shared handle to the directory store
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
}

impl ServerDeps {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    /// Open a pool sized from configuration
    pub async fn connect(config: &Config) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .connect(&config.database_url)
            .await
            .context("Failed to connect to database")?;

        Ok(Self::new(pool))
    }

    /// Ensure the directory tables exist
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.db_pool)
            .await
            .context("Failed to run migrations")
    }
}
