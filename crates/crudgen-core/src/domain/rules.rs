//! Validation-rule synthesis from column metadata.
//!
//! The mapping is deterministic and evaluated in a fixed precedence:
//!
//! 1. System columns (`id`, timestamps) are excluded entirely.
//! 2. Nullability decides the prefix token: `nullable` or `required`.
//! 3. The normalized [`DataType`] selects the type tokens via a static
//!    lookup, with an explicit default branch (`Other` -> `string`).
//!
//! Edge cases the table must honor:
//! - a missing or zero `max_length` never emits a dangling `max:` token
//! - an enum column with no resolvable literal values degrades to `string`

use crate::domain::column::{ColumnMetadata, DataType};

/// Columns that never produce a validation rule.
pub const SYSTEM_COLUMNS: [&str; 4] = ["id", "created_at", "updated_at", "deleted_at"];

/// A synthesized rule expression for one field.
///
/// `tokens` preserves synthesis order; the canonical wire form is the
/// pipe-joined [`expression`](Self::expression).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRule {
    pub field: String,
    pub tokens: Vec<String>,
}

impl ValidationRule {
    /// The pipe-joined rule expression, e.g. `required|string|max:255`.
    pub fn expression(&self) -> String {
        self.tokens.join("|")
    }
}

/// Synthesize the rule for a single column.
///
/// Returns `None` for system columns.
pub fn synthesize(column: &ColumnMetadata) -> Option<ValidationRule> {
    if SYSTEM_COLUMNS.contains(&column.name.as_str()) {
        return None;
    }

    let mut tokens = Vec::with_capacity(3);
    tokens.push(if column.nullable { "nullable" } else { "required" }.to_string());

    match column.data_type {
        DataType::Text => {
            tokens.push("string".into());
            if let Some(len) = column.max_length {
                if len > 0 {
                    tokens.push(format!("max:{len}"));
                }
            }
        }
        DataType::Integer => tokens.push("integer".into()),
        DataType::Decimal => tokens.push("numeric".into()),
        DataType::Date => tokens.push("date".into()),
        DataType::DateTime => tokens.push("date_format:Y-m-d H:i:s".into()),
        DataType::Enum => {
            if column.enum_values.is_empty() {
                tokens.push("string".into());
            } else {
                tokens.push(format!("in:{}", column.enum_values.join(",")));
            }
        }
        DataType::Json => tokens.push("json".into()),
        DataType::Boolean => tokens.push("boolean".into()),
        DataType::Other => tokens.push("string".into()),
    }

    Some(ValidationRule {
        field: column.name.clone(),
        tokens,
    })
}

/// Synthesize rules for a column sequence, preserving order and skipping
/// system columns.
pub fn synthesize_all(columns: &[ColumnMetadata]) -> Vec<ValidationRule> {
    columns.iter().filter_map(synthesize).collect()
}

/// Format rules as the stub-injectable block: one `'field' => 'expr',`
/// line per rule, indented for the request-stub rules array.
pub fn format_rules_block(rules: &[ValidationRule]) -> String {
    rules
        .iter()
        .map(|r| format!("'{}' => '{}',", r.field, r.expression()))
        .collect::<Vec<_>>()
        .join("\n\t\t")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::column::ColumnDetail;

    fn column(
        name: &str,
        data_type: DataType,
        nullable: bool,
        max_length: Option<u32>,
    ) -> ColumnMetadata {
        ColumnMetadata::new(
            name,
            ColumnDetail {
                data_type,
                nullable,
                max_length,
            },
            Vec::new(),
        )
    }

    #[test]
    fn system_columns_are_excluded() {
        for name in SYSTEM_COLUMNS {
            let col = column(name, DataType::Integer, false, None);
            assert!(synthesize(&col).is_none(), "{name}");
        }
    }

    #[test]
    fn nullable_prefix_reflects_nullability() {
        let required = synthesize(&column("name", DataType::Text, false, None)).unwrap();
        assert_eq!(required.tokens[0], "required");

        let nullable = synthesize(&column("notes", DataType::Text, true, None)).unwrap();
        assert_eq!(nullable.tokens[0], "nullable");
    }

    #[test]
    fn text_with_max_length() {
        let rule = synthesize(&column("name", DataType::Text, false, Some(255))).unwrap();
        assert_eq!(rule.expression(), "required|string|max:255");
    }

    #[test]
    fn text_without_max_length_has_no_dangling_max() {
        let rule = synthesize(&column("notes", DataType::Text, true, None)).unwrap();
        assert_eq!(rule.expression(), "nullable|string");

        let zero = synthesize(&column("notes", DataType::Text, true, Some(0))).unwrap();
        assert_eq!(zero.expression(), "nullable|string");
    }

    #[test]
    fn enum_preserves_declaration_order() {
        let mut col = column("status", DataType::Enum, false, None);
        col.enum_values = vec!["open".into(), "closed".into(), "archived".into()];
        let rule = synthesize(&col).unwrap();
        assert_eq!(rule.expression(), "required|in:open,closed,archived");
    }

    #[test]
    fn enum_without_values_degrades_to_string() {
        let col = column("status", DataType::Enum, false, None);
        assert_eq!(synthesize(&col).unwrap().expression(), "required|string");
    }

    #[test]
    fn datetime_uses_fixed_format_token() {
        let rule = synthesize(&column("starts_at", DataType::DateTime, false, None)).unwrap();
        assert_eq!(rule.expression(), "required|date_format:Y-m-d H:i:s");
    }

    #[test]
    fn remaining_type_tokens() {
        let cases = [
            (DataType::Integer, "required|integer"),
            (DataType::Decimal, "required|numeric"),
            (DataType::Date, "required|date"),
            (DataType::Json, "required|json"),
            (DataType::Boolean, "required|boolean"),
            (DataType::Other, "required|string"),
        ];
        for (data_type, expected) in cases {
            let rule = synthesize(&column("f", data_type, false, None)).unwrap();
            assert_eq!(rule.expression(), expected, "{data_type}");
        }
    }

    #[test]
    fn synthesize_all_preserves_column_order() {
        let columns = vec![
            column("id", DataType::Integer, false, None),
            column("name", DataType::Text, false, Some(255)),
            column("notes", DataType::Text, true, None),
        ];
        let rules = synthesize_all(&columns);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].field, "name");
        assert_eq!(rules[1].field, "notes");
    }

    #[test]
    fn rules_block_formats_one_line_per_field() {
        let rules = vec![
            ValidationRule {
                field: "name".into(),
                tokens: vec!["required".into(), "string".into()],
            },
            ValidationRule {
                field: "age".into(),
                tokens: vec!["required".into(), "integer".into()],
            },
        ];
        assert_eq!(
            format_rules_block(&rules),
            "'name' => 'required|string',\n\t\t'age' => 'required|integer',"
        );
    }
}
