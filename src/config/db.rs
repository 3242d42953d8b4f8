//! Database connection and schema management

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use std::path::Path;

/// Connect to SQLite database with proper configuration
pub async fn connect(db_path: &Path) -> Result<SqlitePool> {
    let database_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let pool = SqlitePool::connect(&database_url)
        .await
        .with_context(|| format!("Failed to connect to database: {}", db_path.display()))?;

    // Configure SQLite for better concurrency and safety
    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await
        .context("Failed to enable WAL mode")?;

    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(&pool)
        .await
        .context("Failed to set synchronous mode")?;

    sqlx::query("PRAGMA temp_store = MEMORY")
        .execute(&pool)
        .await
        .context("Failed to set temp store")?;

    log::debug!("Connected to SQLite database: {}", db_path.display());
    Ok(pool)
}

/// Connect to in-memory database for testing
pub async fn connect_memory() -> Result<SqlitePool> {
    let pool = SqlitePool::connect("sqlite::memory:")
        .await
        .context("Failed to connect to in-memory database")?;

    log::debug!("Connected to in-memory SQLite database");
    Ok(pool)
}

/// Create the settings table if it does not exist yet
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    log::debug!("Running database migrations");

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .execute(pool)
    .await
    .context("Failed to create settings table")?;

    Ok(())
}
