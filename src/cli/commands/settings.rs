//! Commands operating on the stored contact data record

use crate::config::ContactData;
use anyhow::Result;
use log::info;
use std::collections::HashMap;
use std::io::{self, BufRead, Write};

/// List the registered fields with their labels and placeholder names
pub async fn fields_command(app: &ContactData) -> Result<()> {
    for def in app.fields().list() {
        println!("{:<12} {:<24} [public_{}]", def.key, def.label, def.key);
    }
    Ok(())
}

/// Show the stored record, in registry order
pub async fn show_command(app: &ContactData) -> Result<()> {
    let record = app.record().await?;
    for def in app.fields().list() {
        let value = record.get(&def.key);
        let shown = if value.is_empty() { "(not set)" } else { value };
        println!("{:<12} {}", def.key, shown);
    }
    Ok(())
}

/// Print the stored value of a single field
pub async fn get_command(app: &ContactData, field: String) -> Result<()> {
    ensure_known_field(app, &field)?;
    println!("{}", app.record().await?.get(&field));
    Ok(())
}

/// Normalize and save one field value, printing any warnings
pub async fn set_command(app: &ContactData, field: String, value: String) -> Result<()> {
    ensure_known_field(app, &field)?;
    info!("Setting {} to {}", field, value);

    let submitted: HashMap<String, String> = [(field.clone(), value)].into_iter().collect();
    let warnings = app.save_settings(&submitted).await?;

    for warning in &warnings {
        println!("Warning: {}", warning.message);
    }
    println!("Set {} to {}", field, app.record().await?.get(&field));
    Ok(())
}

/// Show or set the administrative fallback address
pub async fn admin_email_command(app: &mut ContactData, value: Option<String>) -> Result<()> {
    match value {
        Some(value) => {
            app.set_admin_email(&value).await?;
            println!("Set admin email to {}", app.admin_email());
        }
        None => {
            let current = app.admin_email();
            if current.is_empty() {
                println!("No admin email set");
            } else {
                println!("{}", current);
            }
        }
    }
    Ok(())
}

/// Delete the stored record, asking for confirmation unless forced
pub async fn reset_command(app: &ContactData, force: bool) -> Result<()> {
    if !force {
        print!("This permanently deletes all stored contact data. Type 'yes' to continue: ");
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        if answer.trim() != "yes" {
            println!("Aborted");
            return Ok(());
        }
    }

    app.deactivate().await?;
    println!("Deleted the contact data record");
    Ok(())
}

fn ensure_known_field(app: &ContactData, field: &str) -> Result<()> {
    if !app.fields().contains(field) {
        anyhow::bail!(
            "Unknown field: {}. Allowed fields: {}",
            field,
            app.fields().keys().join(", ")
        );
    }
    Ok(())
}
