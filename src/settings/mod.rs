//! Settings record, save-time normalization and settings-page surface

pub mod normalizer;
pub mod panel;
pub mod record;

pub use normalizer::{Warning, normalize};
pub use panel::SettingsField;
pub use record::SettingsRecord;
