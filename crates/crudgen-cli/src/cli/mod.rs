//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "crudgen",
    bin_name = "crudgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Schema-driven CRUD scaffolding",
    long_about = "Crudgen derives validation rules and messages from a table \
                  schema, renders the full CRUD artifact family from stubs, \
                  and registers the resource route idempotently.",
    after_help = "EXAMPLES:\n\
        \x20 crudgen make Project --schema schema.toml\n\
        \x20 crudgen make Invoice --schema schema.toml --table billing_invoices\n\
        \x20 crudgen rules projects --schema schema.toml\n\
        \x20 crudgen completions bash > /usr/share/bash-completion/completions/crudgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the CRUD artifact family for a resource.
    #[command(
        visible_alias = "m",
        about = "Generate CRUD artifacts for a resource",
        after_help = "EXAMPLES:\n\
            \x20 crudgen make Project --schema schema.toml\n\
            \x20 crudgen make UserProfile --schema schema.toml --dry-run\n\
            \x20 crudgen make Invoice --stubs ./stubs --routes routes/web.php"
    )]
    Make(MakeArgs),

    /// Print the derived validation rules and messages for a table.
    #[command(
        about = "Show derived rules without writing files",
        after_help = "EXAMPLES:\n\
            \x20 crudgen rules projects --schema schema.toml"
    )]
    Rules(RulesArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 crudgen completions bash > ~/.local/share/bash-completion/completions/crudgen\n\
            \x20 crudgen completions zsh  > ~/.zfunc/_crudgen\n\
            \x20 crudgen completions fish > ~/.config/fish/completions/crudgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── make ──────────────────────────────────────────────────────────────────────

/// Arguments for `crudgen make`.
#[derive(Debug, Args)]
pub struct MakeArgs {
    /// Resource name, e.g. `Project` or `UserProfile`.
    #[arg(value_name = "NAME", help = "Resource name")]
    pub name: String,

    /// Schema-definition file. Without it, generation proceeds with empty
    /// validation blocks.
    #[arg(
        short = 's',
        long = "schema",
        value_name = "FILE",
        help = "TOML schema-definition file"
    )]
    pub schema: Option<PathBuf>,

    /// Override the derived table name (plural snake_case of the resource).
    #[arg(long = "table", value_name = "TABLE", help = "Table name override")]
    pub table: Option<String>,

    /// Directory of stub overrides. Omit to use the built-in stubs.
    #[arg(long = "stubs", value_name = "DIR", help = "Stub directory override")]
    pub stubs: Option<PathBuf>,

    /// Base output directory override (default from config, `app/`).
    #[arg(short = 'o', long = "out", value_name = "DIR", help = "Base output directory")]
    pub out: Option<PathBuf>,

    /// Route registry file override (default from config, `routes/api.php`).
    #[arg(long = "routes", value_name = "FILE", help = "Route registry file")]
    pub routes: Option<PathBuf>,

    /// Preview what would be generated without writing any files.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,
}

// ── rules ─────────────────────────────────────────────────────────────────────

/// Arguments for `crudgen rules`.
#[derive(Debug, Args)]
pub struct RulesArgs {
    /// Table to derive rules for.
    #[arg(value_name = "TABLE", help = "Table name")]
    pub table: String,

    /// Schema-definition file.
    #[arg(
        short = 's',
        long = "schema",
        value_name = "FILE",
        help = "TOML schema-definition file"
    )]
    pub schema: PathBuf,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `crudgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
