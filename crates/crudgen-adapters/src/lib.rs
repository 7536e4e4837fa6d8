//! Infrastructure adapters for crudgen.
//!
//! Implementations of the driven ports defined in `crudgen-core`:
//!
//! - [`schema`]: schema sources ([`MemorySchema`](schema::MemorySchema),
//!   [`TomlSchema`](schema::TomlSchema))
//! - [`stubs`]: stub repositories ([`BuiltinStubs`](stubs::BuiltinStubs),
//!   [`DirectoryStubs`](stubs::DirectoryStubs))
//! - [`filesystem`]: filesystems ([`LocalFilesystem`](filesystem::LocalFilesystem),
//!   [`MemoryFilesystem`](filesystem::MemoryFilesystem))

pub mod filesystem;
pub mod schema;
pub mod stubs;

pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use schema::{MemorySchema, TomlSchema};
pub use stubs::{BuiltinStubs, DirectoryStubs};
