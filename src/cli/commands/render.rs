//! Render command: the direct-call lookup surface

use crate::config::ContactData;
use crate::render::RenderOptions;
use anyhow::Result;

/// Resolve a field and emit the formatted output
///
/// Goes through `handle_action`, which prints the output itself; unknown
/// fields come back as a diagnostic string, not an error.
pub async fn render_command(
    app: &ContactData,
    field: String,
    before: String,
    after: String,
    no_link: bool,
    pattern: Option<String>,
) -> Result<()> {
    let options = RenderOptions {
        before,
        after,
        link: !no_link,
        print: true,
        pattern,
    };

    app.handle_action(&field, &options).await?;
    println!();
    Ok(())
}
