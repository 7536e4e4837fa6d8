//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `crudgen-adapters` crate provides implementations.

use std::fmt;
use std::path::Path;

use crate::domain::ColumnDetail;
use crate::error::CrudgenResult;

/// Port for read-only schema metadata access.
///
/// Implemented by:
/// - `crudgen_adapters::schema::MemorySchema` (fixtures, testing)
/// - `crudgen_adapters::schema::TomlSchema` (schema-definition files)
///
/// ## Contract notes
///
/// - `columns` returns names in declaration order.
/// - `column_detail` returns `None` for unknown columns rather than
///   erroring; callers skip such columns.
/// - `enum_literal_values` returns values in declaration order, stripped
///   of declaration syntax and quotes; an empty Vec means "unavailable"
///   and the caller degrades the rule to `string`.
pub trait SchemaSource: Send + Sync {
    /// Whether the named table exists.
    fn has_table(&self, table: &str) -> CrudgenResult<bool>;

    /// Column names of a table, in declaration order.
    fn columns(&self, table: &str) -> CrudgenResult<Vec<String>>;

    /// Type/nullability/length detail for one column.
    fn column_detail(&self, table: &str, column: &str) -> CrudgenResult<Option<ColumnDetail>>;

    /// Ordered literal values of an enum column.
    fn enum_literal_values(&self, table: &str, column: &str) -> CrudgenResult<Vec<String>>;
}

/// Identifier of a stub template.
///
/// Request and resource stubs are shared across their artifact variants;
/// the rendering context (class name, message) differentiates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StubId {
    Controller,
    Service,
    RepositoryInterface,
    Repository,
    Request,
    Resource,
}

impl StubId {
    /// Canonical file name used by directory-backed stub repositories.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Controller => "controller.stub",
            Self::Service => "service.stub",
            Self::RepositoryInterface => "repository-interface.stub",
            Self::Repository => "repository.stub",
            Self::Request => "request.stub",
            Self::Resource => "resource.stub",
        }
    }

    /// All stub identifiers, in the order artifacts are generated.
    pub const ALL: [StubId; 6] = [
        Self::Controller,
        Self::Service,
        Self::RepositoryInterface,
        Self::Repository,
        Self::Request,
        Self::Resource,
    ];
}

impl fmt::Display for StubId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Port for stub storage and retrieval.
///
/// Implemented by:
/// - `crudgen_adapters::stubs::BuiltinStubs` (compiled-in set)
/// - `crudgen_adapters::stubs::DirectoryStubs` (user-provided overrides)
pub trait StubRepository: Send + Sync {
    /// Load a stub's text.
    ///
    /// # Errors
    /// `ApplicationError::StubNotFound` when the stub is absent.
    fn load(&self, stub: StubId) -> CrudgenResult<String>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `crudgen_adapters::filesystem::LocalFilesystem` (production)
/// - `crudgen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn ensure_dir(&self, path: &Path) -> CrudgenResult<()>;

    /// Write content to a file (full overwrite).
    fn write_file(&self, path: &Path, content: &str) -> CrudgenResult<()>;

    /// Read a file's entire content.
    fn read_to_string(&self, path: &Path) -> CrudgenResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
