//! Error-message synthesis from rule expressions.
//!
//! For every token of every field's rule expression, one message entry is
//! produced (except `nullable`, which is suppressed). Output order is the
//! input field order, then token declaration order within each field.
//! Unknown tokens fall through to a generic templated message rather than
//! failing the run.

use crate::domain::naming::humanize;
use crate::domain::rules::ValidationRule;

/// One human-readable message keyed by `(field, rule)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    pub field: String,
    /// Rule name without parameters, e.g. `max` for `max:255`.
    pub rule: String,
    pub text: String,
}

impl MessageEntry {
    /// The dotted message key, e.g. `name.required`.
    pub fn key(&self) -> String {
        format!("{}.{}", self.field, self.rule)
    }
}

/// Synthesize message entries for a rule sequence.
pub fn synthesize(rules: &[ValidationRule]) -> Vec<MessageEntry> {
    let mut entries = Vec::new();

    for rule in rules {
        let subject = humanize(&rule.field);
        for token in &rule.tokens {
            let (name, params) = split_token(token);
            let text = match name {
                "required" => format!("{subject} is required."),
                // nullable needs no message
                "nullable" => continue,
                "string" => format!("{subject} must be a valid string."),
                "max" => format!("{subject} may not be greater than {params} characters."),
                "integer" => format!("{subject} must be an integer."),
                "numeric" => format!("{subject} must be a valid number."),
                "boolean" => format!("{subject} must be true or false."),
                "date" => format!("{subject} must be a valid date."),
                "date_format" => format!("{subject} must match the format {params}."),
                "in" => format!(
                    "{subject} must be one of the following: {}.",
                    params.replace(',', ", ")
                ),
                "json" => format!("{subject} must be a valid JSON string."),
                "exists" => format!("{subject} must exist in the related table."),
                other => format!("{subject} validation failed for rule {other}."),
            };
            entries.push(MessageEntry {
                field: rule.field.clone(),
                rule: name.to_string(),
                text,
            });
        }
    }

    entries
}

/// Format entries as the stub-injectable block: `'field.rule' => 'Text'`
/// pairs joined by `,\n\t`.
pub fn format_messages_block(entries: &[MessageEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("'{}' => '{}'", e.key(), e.text))
        .collect::<Vec<_>>()
        .join(",\n\t")
}

/// Split a rule token into `(name, params)` on the first `:`.
fn split_token(token: &str) -> (&str, &str) {
    match token.split_once(':') {
        Some((name, params)) => (name, params),
        None => (token, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(field: &str, expression: &str) -> ValidationRule {
        ValidationRule {
            field: field.into(),
            tokens: expression.split('|').map(str::to_string).collect(),
        }
    }

    #[test]
    fn required_and_string_messages() {
        let entries = synthesize(&[rule("name", "required|string")]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key(), "name.required");
        assert_eq!(entries[0].text, "Name is required.");
        assert_eq!(entries[1].text, "Name must be a valid string.");
    }

    #[test]
    fn nullable_is_suppressed() {
        let entries = synthesize(&[rule("notes", "nullable|string")]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key(), "notes.string");
    }

    #[test]
    fn max_message_uses_the_token_parameter() {
        let entries = synthesize(&[rule("name", "required|string|max:255")]);
        let max = entries.iter().find(|e| e.rule == "max").unwrap();
        assert_eq!(max.text, "Name may not be greater than 255 characters.");
    }

    #[test]
    fn in_message_joins_values_with_comma_space() {
        let entries = synthesize(&[rule("status", "required|in:open,closed")]);
        let entry = entries.iter().find(|e| e.rule == "in").unwrap();
        assert_eq!(
            entry.text,
            "Status must be one of the following: open, closed."
        );
    }

    #[test]
    fn date_format_message_carries_the_format() {
        let entries = synthesize(&[rule("starts_at", "required|date_format:Y-m-d H:i:s")]);
        let entry = entries.iter().find(|e| e.rule == "date_format").unwrap();
        assert_eq!(
            entry.text,
            "Starts at must match the format Y-m-d H:i:s."
        );
    }

    #[test]
    fn unknown_token_falls_through_to_generic_message() {
        let entries = synthesize(&[rule("slug", "required|alpha_dash")]);
        let entry = entries.iter().find(|e| e.rule == "alpha_dash").unwrap();
        assert_eq!(entry.text, "Slug validation failed for rule alpha_dash.");
    }

    #[test]
    fn humanizes_underscored_fields() {
        let entries = synthesize(&[rule("start_date", "required|date")]);
        assert_eq!(entries[0].text, "Start date is required.");
    }

    #[test]
    fn output_order_is_field_then_token_order() {
        let entries = synthesize(&[
            rule("name", "required|string"),
            rule("age", "required|integer"),
        ]);
        let keys: Vec<String> = entries.iter().map(MessageEntry::key).collect();
        assert_eq!(
            keys,
            ["name.required", "name.string", "age.required", "age.integer"]
        );
    }

    #[test]
    fn messages_block_shape() {
        let entries = synthesize(&[rule("name", "required")]);
        assert_eq!(
            format_messages_block(&entries),
            "'name.required' => 'Name is required.'"
        );
    }
}
