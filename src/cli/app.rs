use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "contact-cli")]
#[command(about = "Manage and render public contact data")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the registered contact fields
    Fields,
    /// Show the stored contact data record
    Show,
    /// Get the stored value of a field
    Get {
        /// Field key
        field: String,
    },
    /// Set the value of a field (normalized before saving)
    Set {
        /// Field key
        field: String,
        /// Field value
        value: String,
    },
    /// Render a field as template output
    Render {
        /// Field key
        field: String,
        /// String prepended to non-empty output
        #[arg(long, default_value = "")]
        before: String,
        /// String appended to non-empty output
        #[arg(long, default_value = "")]
        after: String,
        /// Render the bare value instead of a hyperlink
        #[arg(long)]
        no_link: bool,
        /// Pattern with a %value% token; overrides linking
        #[arg(long)]
        pattern: Option<String>,
    },
    /// Show or set the administrative fallback email address
    AdminEmail {
        /// New address; omit to show the current one
        value: Option<String>,
    },
    /// Delete the stored contact data record entirely
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}
