//! Core domain layer for crudgen.
//!
//! This module contains pure business logic with no I/O. All filesystem,
//! schema, and stub access goes through ports (traits) defined in the
//! application layer.
//!
//! - **No async**: everything is synchronous
//! - **No I/O**: no filesystem, database, or external calls
//! - **Deterministic**: the same inputs always produce the same outputs

pub mod column;
pub mod context;
pub mod error;
pub mod messages;
pub mod naming;
pub mod route;
pub mod rules;

pub use column::{ColumnDetail, ColumnMetadata, DataType};
pub use context::{Placeholder, TemplateContext};
pub use error::DomainError;
pub use messages::MessageEntry;
pub use route::RoutePatch;
pub use rules::{ValidationRule, SYSTEM_COLUMNS};
