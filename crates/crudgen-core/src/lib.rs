//! Crudgen Core - schema-driven scaffolding engine.
//!
//! This crate provides the domain and application layers for the `crudgen`
//! scaffolding generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          crudgen-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (SchemaReader, GenerateService)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (SchemaSource, StubRepository, Filesystem)
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    crudgen-adapters (Infrastructure)    │
//! │ (TomlSchema, BuiltinStubs, LocalFilesystem)
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (rules, messages, templating, routes)  │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use crudgen_core::application::{GenerateRequest, GenerateService, Layout};
//!
//! # fn wire(schema: Box<dyn crudgen_core::application::ports::SchemaSource>,
//! #         stubs: Box<dyn crudgen_core::application::ports::StubRepository>,
//! #         filesystem: Box<dyn crudgen_core::application::ports::Filesystem>)
//! #     -> crudgen_core::error::CrudgenResult<()> {
//! let service = GenerateService::new(schema, stubs, filesystem, Layout::default());
//! let report = service.generate(&GenerateRequest {
//!     resource: "Project".into(),
//!     table: None,
//!     project_root: ".".into(),
//!     dry_run: false,
//! })?;
//! println!("{} artifacts written", report.written());
//! # Ok(())
//! # }
//! ```

// Domain layer (pure, deterministic logic)
pub mod domain;

// Application layer (orchestration + ports)
pub mod application;

// Unified error types
pub mod error;

/// Public API - what external crates should use.
pub mod prelude {
    pub use crate::application::{
        ports::{Filesystem, SchemaSource, StubRepository},
        ArtifactKind, ArtifactOutcome, ArtifactStatus, GenerateRequest, GenerateService,
        GenerationReport, Layout, RouteOutcome, SchemaReader, StubId,
    };
    pub use crate::domain::{
        ColumnDetail, ColumnMetadata, DataType, MessageEntry, Placeholder, RoutePatch,
        TemplateContext, ValidationRule,
    };
    pub use crate::error::{CrudgenError, CrudgenResult};
}

/// Version info.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
