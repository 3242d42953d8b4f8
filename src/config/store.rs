//! Repository for the persisted contact data record
//!
//! Opaque key-value persistence: the whole record is one JSON unit under a
//! single well-known key. Saves are single-statement upserts, so the storage
//! layer gives last-writer-wins without explicit transactions.

use crate::settings::record::SettingsRecord;
use anyhow::{Context, Result};
use sqlx::SqlitePool;

/// Storage key for the single contact data record
pub const RECORD_KEY: &str = "public_contact_data";

/// Storage key for the host's administrative email address
pub const ADMIN_EMAIL_KEY: &str = "admin_email";

/// Load the contact data record, `None` before the first save
pub async fn get_record(pool: &SqlitePool) -> Result<Option<SettingsRecord>> {
    let raw: Option<String> = get_raw(pool, RECORD_KEY).await?;
    match raw {
        Some(raw) => {
            let record: SettingsRecord =
                serde_json::from_str(&raw).context("Failed to parse contact data record")?;
            Ok(Some(record))
        }
        None => Ok(None),
    }
}

/// Save the whole contact data record
pub async fn set_record(pool: &SqlitePool, record: &SettingsRecord) -> Result<()> {
    let raw = serde_json::to_string(record).context("Failed to serialize contact data record")?;
    set_raw(pool, RECORD_KEY, &raw).await
}

/// Delete the contact data record entirely
pub async fn delete_record(pool: &SqlitePool) -> Result<()> {
    let result = sqlx::query("DELETE FROM settings WHERE key = ?")
        .bind(RECORD_KEY)
        .execute(pool)
        .await
        .context("Failed to delete contact data record")?;

    if result.rows_affected() > 0 {
        log::debug!("Deleted contact data record");
    }

    Ok(())
}

/// Administrative fallback address, empty if never set
pub async fn get_admin_email(pool: &SqlitePool) -> Result<String> {
    Ok(get_raw(pool, ADMIN_EMAIL_KEY).await?.unwrap_or_default())
}

/// Set the administrative fallback address
pub async fn set_admin_email(pool: &SqlitePool, value: &str) -> Result<()> {
    set_raw(pool, ADMIN_EMAIL_KEY, value).await
}

async fn get_raw(pool: &SqlitePool, key: &str) -> Result<Option<String>> {
    sqlx::query_scalar("SELECT value FROM settings WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await
        .with_context(|| format!("Failed to get setting '{}'", key))
}

async fn set_raw(pool: &SqlitePool, key: &str, value: &str) -> Result<()> {
    sqlx::query(
        "INSERT INTO settings (key, value, updated_at) VALUES (?, ?, CURRENT_TIMESTAMP)
         ON CONFLICT(key) DO UPDATE SET value = ?, updated_at = CURRENT_TIMESTAMP",
    )
    .bind(key)
    .bind(value)
    .bind(value)
    .execute(pool)
    .await
    .with_context(|| format!("Failed to set setting '{}'", key))?;

    log::debug!("Set setting: {}", key);
    Ok(())
}
