//! Programmatic in-memory schema source.
//!
//! Used by tests and by the `rules` command when a schema file is loaded
//! into memory first. Raw type tags are normalized through
//! [`DataType::from_raw`] at insertion, so the rest of the pipeline only
//! ever sees normalized tags.

use std::collections::BTreeMap;

use crudgen_core::application::ports::SchemaSource;
use crudgen_core::domain::{ColumnDetail, DataType};
use crudgen_core::error::CrudgenResult;

/// One column definition in a fixture table.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
    pub max_length: Option<u32>,
    pub values: Vec<String>,
}

impl ColumnDef {
    /// Define a column from a raw schema type tag (`varchar`, `bigint`...).
    pub fn new(name: impl Into<String>, raw_type: &str) -> Self {
        Self {
            name: name.into(),
            data_type: DataType::from_raw(raw_type),
            nullable: false,
            max_length: None,
            values: Vec::new(),
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn max_length(mut self, len: u32) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn values(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }
}

/// One table definition: ordered columns.
#[derive(Debug, Clone, Default)]
pub struct TableDef {
    pub columns: Vec<ColumnDef>,
}

/// In-memory [`SchemaSource`] over a fixed table map.
#[derive(Debug, Clone, Default)]
pub struct MemorySchema {
    tables: BTreeMap<String, TableDef>,
}

impl MemorySchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(
        mut self,
        name: impl Into<String>,
        columns: impl IntoIterator<Item = ColumnDef>,
    ) -> Self {
        self.tables.insert(
            name.into(),
            TableDef {
                columns: columns.into_iter().collect(),
            },
        );
        self
    }

    pub fn insert_table(&mut self, name: impl Into<String>, table: TableDef) {
        self.tables.insert(name.into(), table);
    }

    pub fn table_names(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }

    fn column(&self, table: &str, column: &str) -> Option<&ColumnDef> {
        self.tables
            .get(table)?
            .columns
            .iter()
            .find(|c| c.name == column)
    }
}

impl SchemaSource for MemorySchema {
    fn has_table(&self, table: &str) -> CrudgenResult<bool> {
        Ok(self.tables.contains_key(table))
    }

    fn columns(&self, table: &str) -> CrudgenResult<Vec<String>> {
        Ok(self
            .tables
            .get(table)
            .map(|t| t.columns.iter().map(|c| c.name.clone()).collect())
            .unwrap_or_default())
    }

    fn column_detail(&self, table: &str, column: &str) -> CrudgenResult<Option<ColumnDetail>> {
        Ok(self.column(table, column).map(|c| ColumnDetail {
            data_type: c.data_type,
            nullable: c.nullable,
            max_length: c.max_length,
        }))
    }

    fn enum_literal_values(&self, table: &str, column: &str) -> CrudgenResult<Vec<String>> {
        Ok(self
            .column(table, column)
            .map(|c| c.values.clone())
            .unwrap_or_default())
    }
}
