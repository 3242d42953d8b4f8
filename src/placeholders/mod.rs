//! Per-field template placeholder registration
//!
//! One handler per registered field, named by a fixed prefix plus the field
//! key (`public_email`, `public_phone`, ...). Each handler closes over its
//! field key at registration time, so no name introspection happens at
//! invocation. The host owns output insertion, so handlers always force
//! `print = false`.

use crate::config::ContactData;
use crate::render::RenderOptions;
use futures::future::BoxFuture;
use std::collections::HashMap;
use std::sync::Arc;

/// Fixed prefix for placeholder names
pub const PLACEHOLDER_PREFIX: &str = "public_";

/// Handler invoked with the attribute bag parsed from the placeholder text
pub type PlaceholderHandler =
    Arc<dyn Fn(HashMap<String, String>) -> BoxFuture<'static, String> + Send + Sync>;

/// Host side of placeholder substitution
pub trait TemplateHost {
    fn register_placeholder(&mut self, name: String, handler: PlaceholderHandler);
}

/// Register one handler per field on the given host
pub fn register_placeholders(app: Arc<ContactData>, host: &mut dyn TemplateHost) {
    for def in app.fields().list() {
        let name = format!("{}{}", PLACEHOLDER_PREFIX, def.key);
        let key = def.key;
        let app = Arc::clone(&app);

        let handler: PlaceholderHandler = Arc::new(move |attrs| {
            let app = Arc::clone(&app);
            let key = key.clone();
            Box::pin(async move {
                let mut options = RenderOptions::from_attrs(&attrs);
                // The host inserts the output itself.
                options.print = false;

                match app.resolve(&key, &options).await {
                    Ok(out) => out,
                    Err(e) => {
                        log::error!("Placeholder '{}{}' failed: {:#}", PLACEHOLDER_PREFIX, key, e);
                        String::new()
                    }
                }
            })
        });

        log::debug!("Registered placeholder: {}", name);
        host.register_placeholder(name, handler);
    }
}
