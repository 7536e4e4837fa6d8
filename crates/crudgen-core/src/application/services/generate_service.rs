//! Generation orchestrator.
//!
//! One `generate` call runs the whole pipeline: schema read, rule and
//! message synthesis, one render+write per artifact kind, then a single
//! route-registry patch. Artifact failures are isolated - a missing stub
//! or failed write is recorded in the report and the remaining artifacts
//! are still attempted. Only failures that invalidate the entire run
//! (a bad resource name, an unreachable schema source) abort early.

use std::path::{Path, PathBuf};

use tracing::{debug, info, info_span, warn};

use crate::application::layout::Layout;
use crate::application::ports::{Filesystem, SchemaSource, StubId, StubRepository};
use crate::domain::{
    context::{Placeholder, TemplateContext},
    messages, naming, route, rules,
    ColumnMetadata, DomainError,
};
use crate::error::{CrudgenError, CrudgenResult};

/// The family of artifacts one generation run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Controller,
    Service,
    RepositoryInterface,
    Repository,
    CreateRequest,
    UpdateRequest,
    ListingResource,
    CreateResource,
    ShowResource,
}

impl ArtifactKind {
    /// Generation order. Requests and resources share a stub each; the
    /// context differentiates the variants.
    pub const ALL: [ArtifactKind; 9] = [
        Self::Controller,
        Self::Service,
        Self::RepositoryInterface,
        Self::Repository,
        Self::CreateRequest,
        Self::UpdateRequest,
        Self::ListingResource,
        Self::CreateResource,
        Self::ShowResource,
    ];

    pub const fn stub_id(&self) -> StubId {
        match self {
            Self::Controller => StubId::Controller,
            Self::Service => StubId::Service,
            Self::RepositoryInterface => StubId::RepositoryInterface,
            Self::Repository => StubId::Repository,
            Self::CreateRequest | Self::UpdateRequest => StubId::Request,
            Self::ListingResource | Self::CreateResource | Self::ShowResource => StubId::Resource,
        }
    }

    /// Class name for a resource, e.g. `ProjectController` or
    /// `CreateProjectRequest` for resource `Project`.
    pub fn class_name(&self, studly: &str) -> String {
        match self {
            Self::Controller => format!("{studly}Controller"),
            Self::Service => format!("{studly}Service"),
            Self::RepositoryInterface => format!("{studly}RepositoryInterface"),
            Self::Repository => format!("{studly}Repository"),
            Self::CreateRequest => format!("Create{studly}Request"),
            Self::UpdateRequest => format!("Update{studly}Request"),
            Self::ListingResource => format!("{studly}ListingResource"),
            Self::CreateResource => format!("{studly}CreateResource"),
            Self::ShowResource => format!("{studly}ShowResource"),
        }
    }

    /// The layout directory this artifact belongs in.
    pub fn directory<'a>(&self, layout: &'a Layout) -> &'a Path {
        match self {
            Self::Controller => &layout.controllers,
            Self::Service => &layout.services,
            Self::RepositoryInterface => &layout.repository_contracts,
            Self::Repository => &layout.repositories,
            Self::CreateRequest | Self::UpdateRequest => &layout.requests,
            Self::ListingResource | Self::CreateResource | Self::ShowResource => &layout.resources,
        }
    }

    /// Success message for resource artifacts; the other kinds have no
    /// message placeholder in their stubs.
    fn success_message(&self, subject: &str) -> Option<String> {
        match self {
            Self::ListingResource => Some(format!("{subject} retrieved successfully.")),
            Self::CreateResource => Some(format!("{subject} created successfully.")),
            Self::ShowResource => Some(format!("{subject} fetched successfully.")),
            _ => None,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Controller => "controller",
            Self::Service => "service",
            Self::RepositoryInterface => "repository interface",
            Self::Repository => "repository",
            Self::CreateRequest => "create request",
            Self::UpdateRequest => "update request",
            Self::ListingResource => "listing resource",
            Self::CreateResource => "create resource",
            Self::ShowResource => "show resource",
        }
    }
}

/// What happened to one artifact during a run.
#[derive(Debug, Clone)]
pub enum ArtifactStatus {
    Written,
    /// Dry run: the file was rendered but not written.
    Skipped,
    Failed(CrudgenError),
}

#[derive(Debug, Clone)]
pub struct ArtifactOutcome {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub status: ArtifactStatus,
}

/// Outcome of the route-registry patch step.
#[derive(Debug, Clone)]
pub struct RouteOutcome {
    pub path: PathBuf,
    pub import_inserted: bool,
    pub route_inserted: bool,
}

/// Full report of one generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub resource: String,
    pub table: String,
    pub artifacts: Vec<ArtifactOutcome>,
    /// `Err` when the registry could not be read or written; the error
    /// carries the registry path. Artifacts are reported either way.
    pub route: Result<RouteOutcome, CrudgenError>,
}

impl GenerationReport {
    pub fn written(&self) -> usize {
        self.artifacts
            .iter()
            .filter(|a| matches!(a.status, ArtifactStatus::Written))
            .count()
    }

    pub fn failed(&self) -> Vec<&ArtifactOutcome> {
        self.artifacts
            .iter()
            .filter(|a| matches!(a.status, ArtifactStatus::Failed(_)))
            .collect()
    }

    pub fn is_success(&self) -> bool {
        self.failed().is_empty() && self.route.is_ok()
    }
}

/// Parameters of one generation run.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Resource name as typed by the user, e.g. `Project` or `UserProfile`.
    pub resource: String,
    /// Override for the derived table name.
    pub table: Option<String>,
    /// Project root all layout paths are resolved against.
    pub project_root: PathBuf,
    /// Render everything but write nothing.
    pub dry_run: bool,
}

/// Orchestrates the generation pipeline over the driven ports.
pub struct GenerateService {
    schema: Box<dyn SchemaSource>,
    stubs: Box<dyn StubRepository>,
    filesystem: Box<dyn Filesystem>,
    layout: Layout,
}

impl GenerateService {
    pub fn new(
        schema: Box<dyn SchemaSource>,
        stubs: Box<dyn StubRepository>,
        filesystem: Box<dyn Filesystem>,
        layout: Layout,
    ) -> Self {
        Self {
            schema,
            stubs,
            filesystem,
            layout,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Run the full pipeline for one resource.
    pub fn generate(&self, request: &GenerateRequest) -> CrudgenResult<GenerationReport> {
        validate_resource_name(&request.resource)?;

        let studly = naming::studly_case(&request.resource);
        let name = naming::snake_case(&request.resource);
        let table = request
            .table
            .clone()
            .unwrap_or_else(|| naming::table_name(&request.resource));

        let span = info_span!("generate", resource = %studly, table = %table);
        let _guard = span.enter();

        let reader = super::schema_reader::SchemaReader::new(self.schema.as_ref());
        let columns = reader.columns(&table)?;

        let rule_set = rules::synthesize_all(&columns);
        let message_set = messages::synthesize(&rule_set);
        debug!(
            rules = rule_set.len(),
            messages = message_set.len(),
            "validation synthesized"
        );

        let rules_block = rules::format_rules_block(&rule_set);
        let messages_block = messages::format_messages_block(&message_set);
        let fields_block = format_fields_array(&columns);

        let mut artifacts = Vec::with_capacity(ArtifactKind::ALL.len());
        for kind in ArtifactKind::ALL {
            artifacts.push(self.render_artifact(
                kind,
                request,
                &studly,
                &name,
                &rules_block,
                &messages_block,
                &fields_block,
            ));
        }

        let route = self.patch_routes(request, &studly).map_err(|e| {
            warn!(error = %e, "route registry patch failed");
            e
        });

        let report = GenerationReport {
            resource: studly,
            table,
            artifacts,
            route,
        };
        info!(
            written = report.written(),
            failed = report.failed().len(),
            "generation finished"
        );
        Ok(report)
    }

    #[allow(clippy::too_many_arguments)]
    fn render_artifact(
        &self,
        kind: ArtifactKind,
        request: &GenerateRequest,
        studly: &str,
        name: &str,
        rules_block: &str,
        messages_block: &str,
        fields_block: &str,
    ) -> ArtifactOutcome {
        let class_name = kind.class_name(studly);
        let dir = self
            .layout
            .artifact_dir(&request.project_root, kind.directory(&self.layout), studly);
        let path = dir.join(format!("{class_name}.php"));

        let stub = match self.stubs.load(kind.stub_id()) {
            Ok(stub) => stub,
            Err(e) => {
                warn!(artifact = kind.label(), error = %e, "stub load failed");
                return ArtifactOutcome {
                    kind,
                    path,
                    status: ArtifactStatus::Failed(e),
                };
            }
        };

        let mut context = TemplateContext::new()
            .with(
                Placeholder::Namespace,
                namespace_for(kind.directory(&self.layout), studly),
            )
            .with(Placeholder::ClassName, class_name)
            .with(Placeholder::CapsName, studly)
            .with(Placeholder::PluralName, naming::pluralize(name))
            .with(Placeholder::Name, name)
            .with(Placeholder::ClassPath, studly)
            .with(Placeholder::Rules, rules_block)
            .with(Placeholder::Messages, messages_block)
            .with(Placeholder::FieldsArray, fields_block);
        if let Some(message) = kind.success_message(&naming::humanize(name)) {
            context.insert(Placeholder::Message, message);
        }

        let rendered = context.render(&stub);

        if request.dry_run {
            debug!(artifact = kind.label(), path = %path.display(), "dry run, skipping write");
            return ArtifactOutcome {
                kind,
                path,
                status: ArtifactStatus::Skipped,
            };
        }

        let status = self
            .filesystem
            .ensure_dir(&dir)
            .and_then(|()| self.filesystem.write_file(&path, &rendered))
            .map_or_else(ArtifactStatus::Failed, |()| ArtifactStatus::Written);

        if matches!(status, ArtifactStatus::Written) {
            info!(artifact = kind.label(), path = %path.display(), "artifact written");
        }

        ArtifactOutcome { kind, path, status }
    }

    /// Read-modify-write of the route registry as one logical step.
    ///
    /// A missing registry file is treated as empty text, so the patch
    /// creates it with the import and route lines.
    fn patch_routes(
        &self,
        request: &GenerateRequest,
        studly: &str,
    ) -> CrudgenResult<RouteOutcome> {
        let path = self.layout.routes_path(&request.project_root);
        let controller = naming::controller_name(&request.resource);
        let import_line = format!("use App\\Http\\Controllers\\{studly}\\{controller};");
        let resource_line = format!(
            "Route::resource('{}', {controller}::class);",
            naming::route_name(&request.resource)
        );

        let current = if self.filesystem.exists(&path) {
            self.filesystem.read_to_string(&path)?
        } else {
            String::new()
        };

        let patched = route::patch(&current, &import_line, &resource_line);

        if request.dry_run {
            debug!(path = %path.display(), "dry run, route registry unchanged");
        } else if patched.import_inserted || patched.route_inserted {
            if let Some(parent) = path.parent() {
                self.filesystem.ensure_dir(parent)?;
            }
            self.filesystem.write_file(&path, &patched.text)?;
            info!(path = %path.display(), "route registry patched");
        } else {
            info!(path = %path.display(), "route already registered, registry untouched");
        }

        Ok(RouteOutcome {
            path,
            import_inserted: patched.import_inserted,
            route_inserted: patched.route_inserted,
        })
    }
}

/// Resource names must be simple identifiers: the derivations (class
/// names, table names, route names) only make sense for those.
fn validate_resource_name(resource: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidResourceName {
        name: resource.to_string(),
        reason: reason.to_string(),
    };

    if resource.trim().is_empty() {
        return Err(invalid("name is empty"));
    }
    let mut chars = resource.chars();
    let first = chars.next().unwrap_or_default();
    if !first.is_ascii_alphabetic() {
        return Err(invalid("must start with a letter"));
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return Err(invalid(
            "only letters, digits, '_' and '-' are allowed",
        ));
    }
    Ok(())
}

/// PSR-4 style namespace for an artifact directory, e.g. `Http/Controllers`
/// with resource `Project` becomes `App\Http\Controllers\Project`.
fn namespace_for(dir: &Path, studly: &str) -> String {
    let mut parts = vec!["App".to_string()];
    parts.extend(
        dir.components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );
    parts.push(studly.to_string());
    parts.join("\\")
}

/// Field list for resource stubs: one `'field' => $this->field,` line per
/// column, in declaration order. System columns are included here - the
/// API representation exposes `id` and the timestamps even though they
/// carry no validation rules.
fn format_fields_array(columns: &[ColumnMetadata]) -> String {
    columns
        .iter()
        .map(|c| format!("'{0}' => $this->{0},", c.name))
        .collect::<Vec<_>>()
        .join("\n\t\t\t")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColumnDetail, DataType};

    #[test]
    fn every_artifact_kind_maps_to_a_stub() {
        for kind in ArtifactKind::ALL {
            // exercising the match arms; shared stubs are intentional
            let _ = kind.stub_id();
        }
        assert_eq!(ArtifactKind::CreateRequest.stub_id(), StubId::Request);
        assert_eq!(ArtifactKind::ShowResource.stub_id(), StubId::Resource);
    }

    #[test]
    fn class_names_follow_the_conventions() {
        assert_eq!(
            ArtifactKind::Controller.class_name("Project"),
            "ProjectController"
        );
        assert_eq!(
            ArtifactKind::CreateRequest.class_name("Project"),
            "CreateProjectRequest"
        );
        assert_eq!(
            ArtifactKind::ListingResource.class_name("UserProfile"),
            "UserProfileListingResource"
        );
    }

    #[test]
    fn namespace_mirrors_the_layout_directory() {
        assert_eq!(
            namespace_for(Path::new("Http/Controllers"), "Project"),
            "App\\Http\\Controllers\\Project"
        );
        assert_eq!(
            namespace_for(Path::new("Services"), "Invoice"),
            "App\\Services\\Invoice"
        );
    }

    #[test]
    fn fields_array_lists_every_column() {
        let columns = vec![
            ColumnMetadata::new(
                "id",
                ColumnDetail {
                    data_type: DataType::Integer,
                    nullable: false,
                    max_length: None,
                },
                Vec::new(),
            ),
            ColumnMetadata::new(
                "title",
                ColumnDetail {
                    data_type: DataType::Text,
                    nullable: false,
                    max_length: Some(255),
                },
                Vec::new(),
            ),
        ];
        assert_eq!(
            format_fields_array(&columns),
            "'id' => $this->id,\n\t\t\t'title' => $this->title,"
        );
    }

    #[test]
    fn resource_success_messages_match_the_api_wording() {
        assert_eq!(
            ArtifactKind::ListingResource.success_message("Project"),
            Some("Project retrieved successfully.".into())
        );
        assert_eq!(
            ArtifactKind::CreateResource.success_message("Project"),
            Some("Project created successfully.".into())
        );
        assert_eq!(
            ArtifactKind::ShowResource.success_message("Project"),
            Some("Project fetched successfully.".into())
        );
        assert_eq!(ArtifactKind::Controller.success_message("Project"), None);
    }

    #[test]
    fn resource_names_are_validated() {
        assert!(validate_resource_name("Project").is_ok());
        assert!(validate_resource_name("UserProfile").is_ok());
        assert!(validate_resource_name("user_profile").is_ok());
        assert!(validate_resource_name("").is_err());
        assert!(validate_resource_name("9lives").is_err());
        assert!(validate_resource_name("bad name").is_err());
    }
}
