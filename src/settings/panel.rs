//! Per-field descriptors for a host settings page
//!
//! The host application owns the actual page; this module only supplies the
//! label, the input markup and the usage hint for each registered field.

use super::record::SettingsRecord;
use crate::config::store::RECORD_KEY;
use crate::fields::FieldRegistry;
use crate::i18n::{self, Catalog};
use crate::render::esc_attr;

pub const SHORTCODE_HELP_MSG: &str =
    "You may use {0} in editor fields to get this value.";

/// Everything a host settings page needs to render one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsField {
    pub key: String,
    /// Element id, also usable as the `label_for` target
    pub id: String,
    pub label: String,
    pub input_html: String,
    /// Usage hint pointing at the matching placeholder
    pub help: String,
}

/// Build the settings-page descriptors, in registry order
pub fn settings_fields(
    registry: &FieldRegistry,
    record: &SettingsRecord,
    admin_email: &str,
    catalog: &Catalog,
) -> Vec<SettingsField> {
    registry
        .list()
        .into_iter()
        .map(|def| {
            let mut value = record.get(&def.key).to_string();
            // The email input shows the fallback address when unset.
            if def.key == "email" && value.is_empty() {
                value = admin_email.to_string();
            }

            let id = format!("{}_{}", RECORD_KEY, def.key);
            let name = format!("{}[{}]", RECORD_KEY, def.key);
            let input_html = format!(
                "<input type='text' value='{}' name='{}' id='{}' class='regular-text code' />",
                esc_attr(&value),
                name,
                id
            );
            let help = i18n::fill(
                catalog.t(SHORTCODE_HELP_MSG),
                &[&format!("<code>[public_{}]</code>", def.key)],
            );

            SettingsField {
                key: def.key,
                id,
                label: def.label,
                input_html,
                help,
            }
        })
        .collect()
}
