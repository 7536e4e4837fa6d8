//! Schema source adapters.

mod memory;
mod toml;

pub use memory::{ColumnDef, MemorySchema, TableDef};
pub use toml::TomlSchema;
