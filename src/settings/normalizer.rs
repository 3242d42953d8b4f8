//! Save-time validation and correction of submitted field values
//!
//! Invalid input never produces an error: values are corrected or rolled
//! back to the previous record, and warnings are the only failure signal.

use super::record::SettingsRecord;
use crate::i18n::{self, Catalog};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$").unwrap()
});
static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").unwrap());
static NON_PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\d+-]").unwrap());

pub const EMAIL_REJECTED_MSG: &str =
    "{0} is not a valid email address. The previous value {1} will be used instead.";
pub const PHONE_REWRITTEN_MSG: &str = "The phone number {0} has been changed to {1}. \
    Please check if it is still okay. Replace spaces with {2} if you need separators.";

/// Warning surfaced to the submitting user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub field: String,
    pub message: String,
}

/// Normalize a submission against the previous record.
///
/// Merge semantics: the returned record starts from `previous` and only the
/// submitted keys are replaced. Unknown keys pass through trimmed.
pub fn normalize(
    submitted: &HashMap<String, String>,
    previous: &SettingsRecord,
    catalog: &Catalog,
) -> (SettingsRecord, Vec<Warning>) {
    let mut record = previous.clone();
    let mut warnings = Vec::new();

    for (key, raw) in submitted {
        let value = raw.trim().to_string();
        match key.as_str() {
            "email" => {
                if value.is_empty() || is_valid_email(&value) {
                    record.set("email", value);
                } else {
                    // Roll back to the previous value, empty if absent.
                    let fallback = previous.get("email").to_string();
                    warnings.push(Warning {
                        field: "email".to_string(),
                        message: i18n::fill(
                            catalog.t(EMAIL_REJECTED_MSG),
                            &[&value, &fallback],
                        ),
                    });
                    record.set("email", fallback);
                }
            }
            "phone" => {
                if value.is_empty() {
                    record.set("phone", value);
                    continue;
                }
                let normalized = normalize_phone(&value);
                if normalized != value {
                    warnings.push(Warning {
                        field: "phone".to_string(),
                        message: i18n::fill(
                            catalog.t(PHONE_REWRITTEN_MSG),
                            &[&value, &normalized, "-"],
                        ),
                    });
                }
                record.set("phone", normalized);
            }
            _ => record.set(key, value),
        }
    }

    (record, warnings)
}

/// Syntactic email address check
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Canonical phone form: space runs become a single hyphen, everything
/// outside digits, `+` and `-` is stripped
pub fn normalize_phone(value: &str) -> String {
    let hyphenated = SPACE_RUNS.replace_all(value, "-");
    NON_PHONE.replace_all(&hyphenated, "").into_owned()
}
