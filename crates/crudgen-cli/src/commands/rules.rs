//! Implementation of the `crudgen rules` command.
//!
//! Prints the derived rule and message maps for a table without writing
//! anything. Useful for checking what a schema will produce before
//! running `make`.

use tracing::instrument;

use crudgen_adapters::TomlSchema;
use crudgen_core::application::SchemaReader;
use crudgen_core::domain::{messages, rules};

use crate::{
    cli::RulesArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(table = %args.table))]
pub fn execute(args: RulesArgs, output: OutputManager) -> CliResult<()> {
    if !args.schema.exists() {
        return Err(CliError::PathNotFound {
            path: args.schema.clone(),
        });
    }

    let schema = TomlSchema::from_path(&args.schema)?;
    let reader = SchemaReader::new(&schema);
    let columns = reader.columns(&args.table)?;

    if columns.is_empty() {
        output.warning(&format!(
            "table '{}' not found in {} (tables: {})",
            args.table,
            args.schema.display(),
            schema.table_names().join(", ")
        ))?;
        return Ok(());
    }

    let rule_set = rules::synthesize_all(&columns);
    let message_set = messages::synthesize(&rule_set);

    output.header(&format!("Rules for '{}'", args.table))?;
    for rule in &rule_set {
        output.print(&format!("  {:<16} {}", rule.field, rule.expression()))?;
    }

    output.print("")?;
    output.header("Messages")?;
    for entry in &message_set {
        output.print(&format!("  {:<24} {}", entry.key(), entry.text))?;
    }

    Ok(())
}
