pub mod render;
pub mod settings;

pub use render::render_command;
pub use settings::{
    admin_email_command, fields_command, get_command, reset_command, set_command, show_command,
};
