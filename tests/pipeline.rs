//! End-to-end coverage of the save -> store -> render pipeline

use contact_cli::config::ContactData;
use contact_cli::placeholders::{self, PlaceholderHandler, TemplateHost};
use contact_cli::render::RenderOptions;
use std::collections::HashMap;
use std::sync::Arc;

fn submit(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn bare() -> RenderOptions {
    RenderOptions {
        link: false,
        print: false,
        ..Default::default()
    }
}

#[tokio::test]
async fn save_normalizes_and_render_links() {
    let app = ContactData::new_test().await.unwrap();

    let warnings = app
        .save_settings(&submit(&[
            ("phone", "+49 30 123 456"),
            ("email", "info@example.com"),
            ("twitter", "  https://twitter.com/example "),
        ]))
        .await
        .unwrap();

    // Only the phone was rewritten.
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field, "phone");

    let record = app.record().await.unwrap();
    assert_eq!(record.get("phone"), "+49-30-123-456");
    assert_eq!(record.get("twitter"), "https://twitter.com/example");

    let linked = RenderOptions {
        link: true,
        print: false,
        ..Default::default()
    };
    assert_eq!(
        app.resolve("phone", &linked).await.unwrap(),
        "<a href='tel:+49-30-123-456'>+49-30-123-456</a>"
    );
    assert_eq!(
        app.resolve("email", &linked).await.unwrap(),
        "<a href='mailto:info&#64;example&#46;com'>info&#64;example&#46;com</a>"
    );
}

#[tokio::test]
async fn unknown_field_yields_diagnostic_not_error() {
    let app = ContactData::new_test().await.unwrap();

    let out = app.resolve("bogus", &bare()).await.unwrap();
    assert_eq!(
        out,
        "Invalid field: bogus. Allowed fields: email, phone, googleplus, facebook, twitter"
    );
}

#[tokio::test]
async fn second_save_merges_into_existing_record() {
    let app = ContactData::new_test().await.unwrap();

    app.save_settings(&submit(&[("facebook", "https://facebook.com/example")]))
        .await
        .unwrap();
    app.save_settings(&submit(&[("phone", "555-123")]))
        .await
        .unwrap();

    let record = app.record().await.unwrap();
    assert_eq!(record.get("facebook"), "https://facebook.com/example");
    assert_eq!(record.get("phone"), "555-123");
}

#[tokio::test]
async fn placeholder_handlers_render_from_storage() {
    let app = Arc::new(ContactData::new_test().await.unwrap());
    app.save_settings(&submit(&[("phone", "555-123")]))
        .await
        .unwrap();

    #[derive(Default)]
    struct CollectingHost {
        handlers: HashMap<String, PlaceholderHandler>,
    }

    impl TemplateHost for CollectingHost {
        fn register_placeholder(&mut self, name: String, handler: PlaceholderHandler) {
            self.handlers.insert(name, handler);
        }
    }

    let mut host = CollectingHost::default();
    placeholders::register_placeholders(Arc::clone(&app), &mut host);
    assert_eq!(host.handlers.len(), 5);

    let handler = host.handlers.get("public_phone").unwrap();
    let out = handler(submit(&[("before", "Call "), ("link", "no")])).await;
    assert_eq!(out, "Call 555-123");
}

#[tokio::test]
async fn deactivation_wipes_the_record() {
    let app = ContactData::new_test().await.unwrap();

    app.save_settings(&submit(&[("googleplus", "https://plus.google.com/+Example")]))
        .await
        .unwrap();
    app.deactivate().await.unwrap();

    let record = app.record().await.unwrap();
    assert!(record.is_empty());
    assert_eq!(app.resolve("googleplus", &bare()).await.unwrap(), "");
}

#[tokio::test]
async fn settings_panel_reflects_record_and_fallback() {
    let mut app = ContactData::new_test().await.unwrap();
    app.set_admin_email("admin@example.com").await.unwrap();
    app.save_settings(&submit(&[("phone", "555-123")]))
        .await
        .unwrap();

    let panel = app.settings_panel().await.unwrap();
    assert_eq!(panel.len(), 5);

    let email = panel.iter().find(|f| f.key == "email").unwrap();
    assert!(email.input_html.contains("value='admin@example.com'"));

    let phone = panel.iter().find(|f| f.key == "phone").unwrap();
    assert!(phone.input_html.contains("value='555-123'"));
    assert!(phone.help.contains("[public_phone]"));
}
