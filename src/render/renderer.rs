//! Field resolution and output formatting

use super::options::{RenderOptions, VALUE_TOKEN};
use crate::fields::FieldRegistry;
use crate::i18n::{self, Catalog};
use crate::settings::record::SettingsRecord;

pub const INVALID_FIELD_MSG: &str = "Invalid field: {0}. Allowed fields: {1}";

/// Stateless renderer over one loaded settings record.
///
/// Each resolve call is independent; the record snapshot is read once by the
/// caller and borrowed here for the duration of the call.
pub struct Renderer<'a> {
    registry: &'a FieldRegistry,
    record: &'a SettingsRecord,
    admin_email: &'a str,
    catalog: &'a Catalog,
}

impl<'a> Renderer<'a> {
    pub fn new(
        registry: &'a FieldRegistry,
        record: &'a SettingsRecord,
        admin_email: &'a str,
        catalog: &'a Catalog,
    ) -> Self {
        Self {
            registry,
            record,
            admin_email,
            catalog,
        }
    }

    /// Resolve a field into its formatted output.
    ///
    /// An unknown field yields a diagnostic string naming the allowed
    /// fields, never an error.
    pub fn resolve(&self, field: &str, options: &RenderOptions) -> String {
        if !self.registry.contains(field) {
            return self.invalid_field(field);
        }

        let mut value = esc_attr(self.record.get(field));
        if field == "email" {
            if value.is_empty() {
                value = esc_attr(self.admin_email);
            }
            value = obfuscate(&value);
        }

        let formatted = if let Some(pattern) = &options.pattern {
            pattern.replace(VALUE_TOKEN, &value)
        } else if options.link {
            link(&value, field)
        } else {
            value
        };

        // Don't wrap an empty value in before/after markup.
        if formatted.is_empty() {
            return String::new();
        }

        format!("{}{}{}", options.before, formatted, options.after)
    }

    fn invalid_field(&self, field: &str) -> String {
        let allowed = self.registry.keys().join(", ");
        i18n::fill(self.catalog.t(INVALID_FIELD_MSG), &[field, &allowed])
    }
}

fn link(value: &str, field: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let prefix = match field {
        "email" => "mailto:",
        "phone" => "tel:",
        _ => "",
    };
    format!("<a href='{prefix}{value}'>{value}</a>")
}

/// Escape a value for use inside HTML attribute markup
pub fn esc_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}

/// Entity-encode an address so harvesters don't get the literal string
pub fn obfuscate(address: &str) -> String {
    let mut out = String::with_capacity(address.len() * 2);
    for c in address.chars() {
        match c {
            '@' => out.push_str("&#64;"),
            '.' => out.push_str("&#46;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::defaults::register_defaults;

    struct Fixture {
        registry: FieldRegistry,
        record: SettingsRecord,
        admin_email: String,
        catalog: Catalog,
    }

    impl Fixture {
        fn new() -> Self {
            let registry = FieldRegistry::new();
            let catalog = Catalog::new();
            register_defaults(&registry, &catalog).unwrap();
            Self {
                registry,
                record: SettingsRecord::new(),
                admin_email: String::new(),
                catalog,
            }
        }

        fn renderer(&self) -> Renderer<'_> {
            Renderer::new(&self.registry, &self.record, &self.admin_email, &self.catalog)
        }
    }

    fn bare() -> RenderOptions {
        RenderOptions {
            link: false,
            print: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_unknown_field_diagnostic() {
        let fx = Fixture::new();
        assert_eq!(
            fx.renderer().resolve("bogus", &bare()),
            "Invalid field: bogus. Allowed fields: email, phone, googleplus, facebook, twitter"
        );
    }

    #[test]
    fn test_phone_link() {
        let mut fx = Fixture::new();
        fx.record.set("phone", "+1-555-123".to_string());

        let options = RenderOptions {
            link: true,
            print: false,
            ..Default::default()
        };
        assert_eq!(
            fx.renderer().resolve("phone", &options),
            "<a href='tel:+1-555-123'>+1-555-123</a>"
        );
    }

    #[test]
    fn test_plain_href_for_profile_fields() {
        let mut fx = Fixture::new();
        fx.record
            .set("twitter", "https://twitter.com/example".to_string());

        let options = RenderOptions {
            link: true,
            print: false,
            ..Default::default()
        };
        assert_eq!(
            fx.renderer().resolve("twitter", &options),
            "<a href='https://twitter.com/example'>https://twitter.com/example</a>"
        );
    }

    #[test]
    fn test_empty_value_suppresses_wrappers() {
        let fx = Fixture::new();
        let options = RenderOptions {
            before: "(".to_string(),
            after: ")".to_string(),
            link: false,
            print: false,
            ..Default::default()
        };
        assert_eq!(fx.renderer().resolve("twitter", &options), "");
    }

    #[test]
    fn test_before_after_around_value() {
        let mut fx = Fixture::new();
        fx.record.set("phone", "555-123".to_string());

        let options = RenderOptions {
            before: "Phone: ".to_string(),
            after: ".".to_string(),
            link: false,
            print: false,
            ..Default::default()
        };
        assert_eq!(fx.renderer().resolve("phone", &options), "Phone: 555-123.");
    }

    #[test]
    fn test_pattern_overrides_link() {
        let mut fx = Fixture::new();
        fx.record.set("phone", "555-123".to_string());

        let options = RenderOptions {
            link: true,
            print: false,
            pattern: Some("Call %value% now".to_string()),
            ..Default::default()
        };
        assert_eq!(fx.renderer().resolve("phone", &options), "Call 555-123 now");
    }

    #[test]
    fn test_empty_email_uses_obfuscated_admin_fallback() {
        let mut fx = Fixture::new();
        fx.admin_email = "admin@example.com".to_string();

        let out = fx.renderer().resolve("email", &bare());
        assert_eq!(out, "admin&#64;example&#46;com");
        assert!(!out.contains("admin@example.com"));
    }

    #[test]
    fn test_stored_email_is_obfuscated_and_linked() {
        let mut fx = Fixture::new();
        fx.record.set("email", "info@example.com".to_string());

        let options = RenderOptions {
            link: true,
            print: false,
            ..Default::default()
        };
        assert_eq!(
            fx.renderer().resolve("email", &options),
            "<a href='mailto:info&#64;example&#46;com'>info&#64;example&#46;com</a>"
        );
    }

    #[test]
    fn test_email_empty_without_fallback() {
        let fx = Fixture::new();
        assert_eq!(fx.renderer().resolve("email", &bare()), "");
    }

    #[test]
    fn test_value_is_attribute_escaped() {
        let mut fx = Fixture::new();
        fx.record
            .set("twitter", "it's <fine>".to_string());

        assert_eq!(
            fx.renderer().resolve("twitter", &bare()),
            "it&#039;s &lt;fine&gt;"
        );
    }

    #[test]
    fn test_unknown_record_keys_are_never_rendered() {
        let mut fx = Fixture::new();
        fx.record.set("pager", "12345".to_string());

        let out = fx.renderer().resolve("pager", &bare());
        assert!(out.starts_with("Invalid field: pager."));
    }
}
