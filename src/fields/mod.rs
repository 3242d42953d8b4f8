//! Field registry for admin-configurable contact fields
//!
//! The registry holds the recognized field keys and their display labels.
//! It is populated once at startup (defaults plus any extension
//! registrations) and frozen for the lifetime of the process.

pub mod defaults;
pub mod registry;
pub mod types;

pub use registry::FieldRegistry;
pub use types::FieldDefinition;
