//! Rendering of stored field values into formatted output

pub mod options;
pub mod renderer;

pub use options::{RenderOptions, VALUE_TOKEN};
pub use renderer::{Renderer, esc_attr, obfuscate};
