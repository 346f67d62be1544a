//! CLI commands.

mod format;
mod kinds;
mod parse;
mod segments;
mod validate;

use anyhow::Result;
use arm_resource_manager::{RegistryError, ResourceKind};
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;

/// armid - Inspect, parse, format and validate resource manager IDs.
#[derive(Debug, Parser)]
#[command(name = "armid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, env = "ARMID_FORMAT", default_value = "table")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List registered resource kinds.
    Kinds(kinds::KindsCommand),

    /// Show the segment template of a kind.
    Segments(segments::SegmentsCommand),

    /// Parse IDs and print their fields.
    Parse(parse::ParseCommand),

    /// Validate IDs and report a verdict for each.
    Validate(validate::ValidateCommand),

    /// Build the canonical ID of a kind from field values.
    Format(format::FormatCommand),
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let ctx = CommandContext {
            format: OutputFormat::from_flag(&self.format),
            config,
        };

        match self.command {
            Commands::Kinds(cmd) => cmd.run(ctx),
            Commands::Segments(cmd) => cmd.run(ctx),
            Commands::Parse(cmd) => cmd.run(ctx),
            Commands::Validate(cmd) => cmd.run(ctx),
            Commands::Format(cmd) => cmd.run(ctx),
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Flag wins over `ARMID_INSENSITIVE`.
    pub fn insensitive(&self, flag: bool) -> bool {
        flag || self.config.insensitive
    }
}

/// Resolve a kind by key or unambiguous type name.
fn resolve_kind(key: &str) -> Result<&'static ResourceKind, CliError> {
    arm_resource_manager::find(key).map_err(|e| match e {
        RegistryError::UnknownKind(key) => CliError::UnknownKind(key),
        other => CliError::Registry(other),
    })
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resolve_kind() {
        assert_eq!(resolve_kind("snapshotid").unwrap().resource, "Snapshot");
        assert!(matches!(
            resolve_kind("nope"),
            Err(CliError::UnknownKind(key)) if key == "nope"
        ));
    }

    #[test]
    fn test_parse_global_format() {
        let cli = Cli::try_parse_from(["armid", "kinds", "--format", "json"]).unwrap();
        assert_eq!(cli.format, "json");
    }
}
