//! Implementation of the `crudgen make` command.
//!
//! Responsibility: translate CLI arguments into adapter wiring plus a
//! `GenerateRequest`, call the core service, and display the report. No
//! generation logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crudgen_adapters::schema::MemorySchema;
use crudgen_adapters::{BuiltinStubs, DirectoryStubs, LocalFilesystem, TomlSchema};
use crudgen_core::application::ports::{Filesystem, SchemaSource, StubRepository};
use crudgen_core::application::{
    ArtifactStatus, GenerateRequest, GenerateService, GenerationReport, Layout,
};

use crate::{
    cli::{GlobalArgs, MakeArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `crudgen make` command.
///
/// Dispatch sequence:
/// 1. Resolve the layout (config, then flag overrides)
/// 2. Wire the schema source, stub repository, and filesystem
/// 3. Run the generation service
/// 4. Render the report; a partial failure is still reported in full
#[instrument(skip_all, fields(resource = %args.name))]
pub fn execute(
    args: MakeArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let layout = resolve_layout(&config, &args);
    let schema = resolve_schema(&args, &output)?;
    let stubs = resolve_stubs(&args, &config)?;
    let filesystem: Box<dyn Filesystem> = Box::new(LocalFilesystem::new());

    let project_root = std::env::current_dir()?;
    debug!(root = %project_root.display(), "project root resolved");

    let service = GenerateService::new(schema, stubs, filesystem, layout);
    let request = GenerateRequest {
        resource: args.name.clone(),
        table: args.table.clone(),
        project_root,
        dry_run: args.dry_run,
    };

    if args.dry_run {
        output.info("Dry run: no files will be written")?;
    }
    output.header(&format!("Generating '{}'...", args.name))?;
    info!(resource = %args.name, "generation started");

    let report = service.generate(&request)?;
    render_report(&report, &args, &global, &output)?;

    let failed = report.failed();
    if !failed.is_empty() {
        let mut details: Vec<String> = failed
            .iter()
            .map(|a| {
                let reason = match &a.status {
                    ArtifactStatus::Failed(e) => e.to_string(),
                    _ => String::new(),
                };
                format!("{}: {reason}", a.kind.label())
            })
            .collect();
        if let Err(e) = &report.route {
            details.push(format!("route registry: {e}"));
        }
        return Err(CliError::GenerationIncomplete {
            failed: failed.len(),
            details,
        });
    }

    // A failed registry patch is fatal even when every artifact landed:
    // the generated controller would be unreachable.
    if let Err(e) = &report.route {
        return Err(CliError::Core(e.clone()));
    }

    Ok(())
}

fn resolve_layout(config: &AppConfig, args: &MakeArgs) -> Layout {
    let mut layout = config.layout.clone();
    if let Some(out) = &args.out {
        layout.base_path = out.clone();
    }
    if let Some(routes) = &args.routes {
        layout.routes_file = routes.clone();
    }
    layout
}

fn resolve_schema(args: &MakeArgs, output: &OutputManager) -> CliResult<Box<dyn SchemaSource>> {
    match &args.schema {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::PathNotFound { path: path.clone() });
            }
            Ok(Box::new(TomlSchema::from_path(path)?))
        }
        None => {
            output.warning("No --schema given; validation rules will be empty")?;
            Ok(Box::new(MemorySchema::new()))
        }
    }
}

fn resolve_stubs(args: &MakeArgs, config: &AppConfig) -> CliResult<Box<dyn StubRepository>> {
    let dir: Option<PathBuf> = args.stubs.clone().or_else(|| config.stubs.dir.clone());
    match dir {
        Some(dir) => {
            if !dir.is_dir() {
                return Err(CliError::PathNotFound { path: dir });
            }
            Ok(Box::new(DirectoryStubs::new(dir)))
        }
        None => Ok(Box::new(BuiltinStubs::new())),
    }
}

fn render_report(
    report: &GenerationReport,
    args: &MakeArgs,
    global: &GlobalArgs,
    output: &OutputManager,
) -> CliResult<()> {
    for artifact in &report.artifacts {
        let label = format!("{:<20} {}", artifact.kind.label(), artifact.path.display());
        match &artifact.status {
            ArtifactStatus::Written => output.success(&label)?,
            ArtifactStatus::Skipped => output.info(&format!("would write {label}"))?,
            ArtifactStatus::Failed(e) => output.error(&format!("{label} ({e})"))?,
        }
    }

    match &report.route {
        Ok(route) => match (route.import_inserted, route.route_inserted) {
            (false, false) => output.info(&format!(
                "route already registered in {}",
                route.path.display()
            ))?,
            _ if args.dry_run => output.info(&format!(
                "would register route in {}",
                route.path.display()
            ))?,
            _ => output.success(&format!("route registered in {}", route.path.display()))?,
        },
        Err(e) => {
            output.error(&format!("route registry update failed: {e}"))?;
        }
    }

    if !global.quiet && report.is_success() && !args.dry_run {
        output.print("")?;
        output.print(&format!(
            "Generated {} artifacts for '{}' (table '{}')",
            report.written(),
            report.resource,
            report.table
        ))?;
    }

    Ok(())
}
