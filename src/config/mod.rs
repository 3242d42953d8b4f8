//! Service object wiring storage, registry, normalizer and renderer
//!
//! `ContactData` is constructed once at startup and passed to every
//! collaborator that needs it (CLI commands, placeholder handlers). There is
//! no global singleton accessor.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

pub mod db;
pub mod store;

use crate::fields::{self, FieldRegistry};
use crate::i18n::Catalog;
use crate::render::{RenderOptions, Renderer};
use crate::settings::normalizer::{self, Warning};
use crate::settings::panel::{self, SettingsField};
use crate::settings::record::SettingsRecord;

/// Main service object over the SQLite backend
pub struct ContactData {
    pool: sqlx::SqlitePool,
    registry: Arc<FieldRegistry>,
    catalog: Catalog,
    admin_email: String,
}

impl ContactData {
    /// Get the path to the SQLite database file
    pub fn get_db_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("contact-cli")
        } else {
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".contact-cli")
        };

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
            log::info!("Created config directory: {:?}", config_dir);
        }

        Ok(config_dir.join("contact.db"))
    }

    /// Open the database and construct the service.
    ///
    /// The registry is frozen here; extension registrations must happen
    /// before this call.
    pub async fn load(registry: Arc<FieldRegistry>, catalog: Catalog) -> Result<Self> {
        let db_path = Self::get_db_path()?;
        log::debug!("Loading contact data from: {:?}", db_path);

        let pool = db::connect(&db_path).await?;
        db::run_migrations(&pool).await?;

        Self::with_pool(pool, registry, catalog).await
    }

    /// Create a service over an in-memory database for testing
    pub async fn new_test() -> Result<Self> {
        let pool = db::connect_memory().await?;
        db::run_migrations(&pool).await?;

        let catalog = Catalog::new();
        let registry = Arc::new(FieldRegistry::new());
        fields::defaults::register_defaults(&registry, &catalog)?;

        Self::with_pool(pool, registry, catalog).await
    }

    async fn with_pool(
        pool: sqlx::SqlitePool,
        registry: Arc<FieldRegistry>,
        catalog: Catalog,
    ) -> Result<Self> {
        // Captured once; replacement for a missing public email address.
        let admin_email = store::get_admin_email(&pool).await?;
        registry.freeze();

        Ok(Self {
            pool,
            registry,
            catalog,
            admin_email,
        })
    }

    pub fn fields(&self) -> &FieldRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn admin_email(&self) -> &str {
        &self.admin_email
    }

    /// Current record; empty before the first save
    pub async fn record(&self) -> Result<SettingsRecord> {
        Ok(store::get_record(&self.pool).await?.unwrap_or_default())
    }

    /// Normalize and persist a submission.
    ///
    /// Returns the warnings to surface to the submitting user; invalid
    /// input is corrected or rolled back, never an error.
    pub async fn save_settings(
        &self,
        submitted: &HashMap<String, String>,
    ) -> Result<Vec<Warning>> {
        let previous = self.record().await?;
        let (record, warnings) = normalizer::normalize(submitted, &previous, &self.catalog);
        store::set_record(&self.pool, &record).await?;

        log::debug!(
            "Saved contact data ({} fields, {} warnings)",
            record.len(),
            warnings.len()
        );
        Ok(warnings)
    }

    /// Resolve a field into its formatted output
    pub async fn resolve(&self, field: &str, options: &RenderOptions) -> Result<String> {
        let record = self.record().await?;
        let renderer = Renderer::new(&self.registry, &record, &self.admin_email, &self.catalog);
        Ok(renderer.resolve(field, options))
    }

    /// Direct-call entry point: resolves and, when `print` is set, also
    /// emits the output in place
    pub async fn handle_action(&self, field: &str, options: &RenderOptions) -> Result<String> {
        let out = self.resolve(field, options).await?;
        if options.print {
            print!("{out}");
        }
        Ok(out)
    }

    /// Descriptors for a host settings page, in registry order
    pub async fn settings_panel(&self) -> Result<Vec<SettingsField>> {
        let record = self.record().await?;
        Ok(panel::settings_fields(
            &self.registry,
            &record,
            &self.admin_email,
            &self.catalog,
        ))
    }

    /// Set the administrative fallback address
    pub async fn set_admin_email(&mut self, value: &str) -> Result<()> {
        let value = value.trim();
        store::set_admin_email(&self.pool, value).await?;
        self.admin_email = value.to_string();
        Ok(())
    }

    /// Deactivation path: deletes the persisted record entirely
    pub async fn deactivate(&self) -> Result<()> {
        log::info!("Deactivating: deleting the contact data record");
        store::delete_record(&self.pool).await
    }
}
