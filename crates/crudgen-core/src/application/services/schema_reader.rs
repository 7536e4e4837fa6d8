//! Schema introspection service.
//!
//! Wraps a [`SchemaSource`] port and assembles per-column metadata in a
//! single pass. The degradation policy lives here, not in adapters:
//!
//! - missing table      -> empty column list (warn, not error)
//! - unknown column     -> skipped
//! - enum values absent -> empty value list (rule falls back to `string`)

use tracing::{debug, warn};

use crate::application::ports::SchemaSource;
use crate::domain::{ColumnMetadata, DataType};
use crate::error::CrudgenResult;

/// Reads fully-assembled column metadata for a table.
pub struct SchemaReader<'a> {
    source: &'a dyn SchemaSource,
}

impl<'a> SchemaReader<'a> {
    pub fn new(source: &'a dyn SchemaSource) -> Self {
        Self { source }
    }

    /// Metadata for every column of `table`, in declaration order.
    ///
    /// Returns an empty Vec when the table does not exist. Generation
    /// proceeds with empty rule and message blocks in that case.
    pub fn columns(&self, table: &str) -> CrudgenResult<Vec<ColumnMetadata>> {
        if !self.source.has_table(table)? {
            warn!(table, "table not found in schema, generating without validation rules");
            return Ok(Vec::new());
        }

        let names = self.source.columns(table)?;
        let mut columns = Vec::with_capacity(names.len());

        for name in names {
            let Some(detail) = self.source.column_detail(table, &name)? else {
                debug!(table, column = %name, "no detail for column, skipping");
                continue;
            };

            let enum_values = if detail.data_type == DataType::Enum {
                self.source.enum_literal_values(table, &name)?
            } else {
                Vec::new()
            };

            columns.push(ColumnMetadata::new(name, detail, enum_values));
        }

        debug!(table, count = columns.len(), "schema columns read");
        Ok(columns)
    }
}
