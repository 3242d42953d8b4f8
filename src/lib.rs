pub mod cli;
pub mod config;
pub mod fields;
pub mod i18n;
pub mod placeholders;
pub mod render;
pub mod settings;
