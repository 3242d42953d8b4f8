use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::sync::Arc;

use contact_cli::cli::{self, Cli, Commands};
use contact_cli::config::ContactData;
use contact_cli::fields::{self, FieldRegistry};
use contact_cli::i18n::Catalog;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger to file (truncate on each run)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("contact-cli.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let cli = Cli::parse();
    info!("Starting contact-cli");

    // Translations are optional; missing catalog means verbatim strings.
    let catalog = match std::env::var_os("CONTACT_CLI_CATALOG") {
        Some(path) => Catalog::load(&PathBuf::from(path))?,
        None => Catalog::new(),
    };

    // Populate the registry before construction freezes it.
    let registry = Arc::new(FieldRegistry::new());
    fields::defaults::register_defaults(&registry, &catalog)?;

    let mut app = ContactData::load(registry, catalog).await?;

    match cli.command {
        Commands::Fields => {
            cli::commands::fields_command(&app).await?;
        }
        Commands::Show => {
            cli::commands::show_command(&app).await?;
        }
        Commands::Get { field } => {
            cli::commands::get_command(&app, field).await?;
        }
        Commands::Set { field, value } => {
            cli::commands::set_command(&app, field, value).await?;
        }
        Commands::Render {
            field,
            before,
            after,
            no_link,
            pattern,
        } => {
            cli::commands::render_command(&app, field, before, after, no_link, pattern).await?;
        }
        Commands::AdminEmail { value } => {
            cli::commands::admin_email_command(&mut app, value).await?;
        }
        Commands::Reset { force } => {
            cli::commands::reset_command(&app, force).await?;
        }
    }

    Ok(())
}
