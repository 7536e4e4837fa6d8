//! Application layer: orchestration and ports.
//!
//! The services here sequence the domain logic; the ports define what the
//! application needs from the outside world. No I/O happens in this crate
//! directly - the `crudgen-adapters` crate provides port implementations.

pub mod error;
pub mod layout;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use layout::Layout;
pub use ports::StubId;
pub use services::{
    generate_service::{
        ArtifactKind, ArtifactOutcome, ArtifactStatus, GenerateRequest, GenerateService,
        GenerationReport, RouteOutcome,
    },
    schema_reader::SchemaReader,
};
