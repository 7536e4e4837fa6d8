//! Column metadata value objects.
//!
//! # Design
//!
//! `DataType` is the *normalized* type tag: adapters read whatever raw
//! spelling their schema source uses (`varchar`, `bigint`, `tinyint`, ...)
//! and normalize it through [`DataType::from_raw`] before anything else in
//! the core sees it. Rule synthesis is keyed on the normalized tag only,
//! so the raw-spelling table lives in exactly one place.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized column data type.
///
/// The `Other` variant is the explicit default branch: any raw tag the
/// table below does not recognize maps to it, and rule synthesis treats
/// it as a plain string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Text,
    Integer,
    Decimal,
    Date,
    DateTime,
    Enum,
    Json,
    Boolean,
    Other,
}

impl DataType {
    /// Normalize a raw schema type tag.
    ///
    /// First match wins; unknown tags fall through to `Other`.
    /// `tinyint` is treated as boolean because boolean columns are
    /// conventionally stored as `tinyint(1)`.
    pub fn from_raw(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "varchar" | "char" | "text" => Self::Text,
            "int" | "integer" | "bigint" | "smallint" | "mediumint" => Self::Integer,
            "decimal" | "float" | "double" => Self::Decimal,
            "date" => Self::Date,
            "datetime" | "timestamp" => Self::DateTime,
            "enum" => Self::Enum,
            "json" => Self::Json,
            "boolean" | "bool" | "tinyint" => Self::Boolean,
            _ => Self::Other,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Enum => "enum",
            Self::Json => "json",
            Self::Boolean => "boolean",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-column detail returned by the schema source.
///
/// This is the narrow shape the `column_detail` port capability yields;
/// enum literal values arrive through a separate lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDetail {
    pub data_type: DataType,
    pub nullable: bool,
    pub max_length: Option<u32>,
}

/// Immutable snapshot of one column at generation time.
///
/// `enum_values` is only populated for `DataType::Enum` columns, in
/// declaration order, stripped of the raw declaration syntax and quotes.
/// Metadata is read fresh per invocation; nothing is cached across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMetadata {
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
    pub max_length: Option<u32>,
    pub enum_values: Vec<String>,
}

impl ColumnMetadata {
    /// Assemble full metadata from a detail record plus enum values.
    pub fn new(name: impl Into<String>, detail: ColumnDetail, enum_values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            data_type: detail.data_type,
            nullable: detail.nullable,
            max_length: detail.max_length,
            enum_values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_normalizes_text_like() {
        assert_eq!(DataType::from_raw("varchar"), DataType::Text);
        assert_eq!(DataType::from_raw("char"), DataType::Text);
        assert_eq!(DataType::from_raw("text"), DataType::Text);
    }

    #[test]
    fn from_raw_normalizes_integer_like() {
        for raw in ["int", "bigint", "smallint", "mediumint"] {
            assert_eq!(DataType::from_raw(raw), DataType::Integer, "{raw}");
        }
    }

    #[test]
    fn from_raw_treats_tinyint_as_boolean() {
        assert_eq!(DataType::from_raw("tinyint"), DataType::Boolean);
    }

    #[test]
    fn from_raw_is_case_insensitive() {
        assert_eq!(DataType::from_raw("VARCHAR"), DataType::Text);
        assert_eq!(DataType::from_raw("DateTime"), DataType::DateTime);
    }

    #[test]
    fn from_raw_unknown_falls_through_to_other() {
        assert_eq!(DataType::from_raw("geometry"), DataType::Other);
        assert_eq!(DataType::from_raw(""), DataType::Other);
    }
}
