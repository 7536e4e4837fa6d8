//! TOML-file-backed schema source.
//!
//! Loads a schema-definition document into a [`MemorySchema`] and
//! delegates the port to it. Document shape:
//!
//! ```toml
//! [tables.projects]
//! columns = [
//!     { name = "id", type = "bigint" },
//!     { name = "title", type = "varchar", max_length = 255 },
//!     { name = "status", type = "enum", values = ["open", "closed"] },
//!     { name = "notes", type = "text", nullable = true },
//! ]
//! ```
//!
//! The `[[tables.<name>.columns]]` array-of-tables spelling parses to the
//! same document.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crudgen_core::application::ports::SchemaSource;
use crudgen_core::application::ApplicationError;
use crudgen_core::domain::ColumnDetail;
use crudgen_core::error::CrudgenResult;

use super::memory::{ColumnDef, MemorySchema, TableDef};

#[derive(Debug, Deserialize)]
struct SchemaDoc {
    #[serde(default)]
    tables: BTreeMap<String, TableDoc>,
}

#[derive(Debug, Deserialize)]
struct TableDoc {
    #[serde(default)]
    columns: Vec<ColumnDoc>,
}

#[derive(Debug, Deserialize)]
struct ColumnDoc {
    name: String,
    #[serde(rename = "type")]
    type_tag: String,
    #[serde(default)]
    nullable: bool,
    #[serde(default)]
    max_length: Option<u32>,
    #[serde(default)]
    values: Vec<String>,
}

/// [`SchemaSource`] backed by a TOML schema-definition file.
#[derive(Debug, Clone)]
pub struct TomlSchema {
    inner: MemorySchema,
}

impl TomlSchema {
    /// Parse a schema document from a string.
    pub fn from_str(source_name: &str, text: &str) -> CrudgenResult<Self> {
        let doc: SchemaDoc = toml::from_str(text).map_err(|e| {
            ApplicationError::SchemaUnavailable {
                origin: source_name.to_string(),
                reason: e.to_string(),
            }
        })?;

        let mut inner = MemorySchema::new();
        for (table_name, table) in doc.tables {
            let columns = table
                .columns
                .into_iter()
                .map(|c| {
                    let mut def = ColumnDef::new(c.name, &c.type_tag);
                    def.nullable = c.nullable;
                    def.max_length = c.max_length;
                    def.values = c.values;
                    def
                })
                .collect();
            inner.insert_table(table_name, TableDef { columns });
        }

        debug!(source = source_name, tables = inner.table_names().len(), "schema loaded");
        Ok(Self { inner })
    }

    /// Load a schema document from disk.
    pub fn from_path(path: &Path) -> CrudgenResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_str(&path.display().to_string(), &text)
    }

    pub fn table_names(&self) -> Vec<&str> {
        self.inner.table_names()
    }
}

impl SchemaSource for TomlSchema {
    fn has_table(&self, table: &str) -> CrudgenResult<bool> {
        self.inner.has_table(table)
    }

    fn columns(&self, table: &str) -> CrudgenResult<Vec<String>> {
        self.inner.columns(table)
    }

    fn column_detail(&self, table: &str, column: &str) -> CrudgenResult<Option<ColumnDetail>> {
        self.inner.column_detail(table, column)
    }

    fn enum_literal_values(&self, table: &str, column: &str) -> CrudgenResult<Vec<String>> {
        self.inner.enum_literal_values(table, column)
    }
}
