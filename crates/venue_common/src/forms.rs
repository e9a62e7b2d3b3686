//! Helpers shared by the HTML-form style endpoints.
//!
//! Browsers submit every input, so an untouched field arrives as an empty
//! string. Both forms treat blank input exactly like a missing field.

use crate::models::FieldError;
use serde::{Deserialize, Deserializer};
use validator::ValidationErrors;

/// Deserialize an optional form value, trimming it and mapping blank input to `None`.
///
/// Use together with `#[serde(default)]` so absent keys are accepted too.
pub fn trimmed_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty()))
}

/// Flatten `validator` output into one message per field, ordered like the form.
///
/// Fields missing from `field_order` are appended alphabetically.
pub fn collect_field_errors(errors: &ValidationErrors, field_order: &[&str]) -> Vec<FieldError> {
    let mut collected: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, field_errors)| {
            let field = field.to_string();
            field_errors.first().map(|first| {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("The {} field is invalid.", field));
                FieldError::new(field, message)
            })
        })
        .collect();

    let rank = |field: &str| {
        field_order
            .iter()
            .position(|known| *known == field)
            .unwrap_or(field_order.len())
    };
    collected.sort_by(|a, b| {
        rank(&a.field)
            .cmp(&rank(&b.field))
            .then_with(|| a.field.cmp(&b.field))
    });
    collected
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::borrow::Cow;
    use validator::ValidationError;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "trimmed_option")]
        value: Option<String>,
    }

    fn probe(query: &str) -> Option<String> {
        serde_urlencoded::from_str::<Probe>(query).unwrap().value
    }

    #[test]
    fn blank_values_become_none() {
        assert_eq!(probe(""), None);
        assert_eq!(probe("value="), None);
        assert_eq!(probe("value=+++"), None);
        assert_eq!(probe("value=+wedding+"), Some("wedding".to_string()));
    }

    #[test]
    fn field_errors_follow_form_order() {
        let mut errors = ValidationErrors::new();
        let mut late = ValidationError::new("required");
        late.message = Some(Cow::from("Message is required."));
        errors.add("message", late);
        errors.add("name", ValidationError::new("required"));

        let collected = collect_field_errors(&errors, &["name", "email", "message"]);
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].field, "name");
        assert_eq!(collected[0].message, "The name field is invalid.");
        assert_eq!(collected[1], FieldError::new("message", "Message is required."));
    }
}
