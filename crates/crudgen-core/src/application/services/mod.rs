//! Application services.

pub mod generate_service;
pub mod schema_reader;

pub use generate_service::{
    ArtifactKind, ArtifactOutcome, ArtifactStatus, GenerateRequest, GenerateService,
    GenerationReport, RouteOutcome,
};
pub use schema_reader::SchemaReader;
