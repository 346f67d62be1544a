//! Build the canonical ID of a kind from field values.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::Args;

use crate::error::CliError;
use crate::output::{print_single, OutputFormat};

use super::{resolve_kind, CommandContext};

/// Build the canonical ID of a kind from field values.
#[derive(Debug, Args)]
pub struct FormatCommand {
    /// Kind key or type name (see `armid kinds`).
    kind: String,

    /// Field values as `field=value`, e.g. `subscriptionId=...`.
    #[arg(required = true)]
    values: Vec<String>,
}

/// Splits `key=value` assignments; the value may itself contain `=`.
fn parse_assignments(assignments: &[String]) -> Result<BTreeMap<String, String>, CliError> {
    assignments
        .iter()
        .map(|assignment| match assignment.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
            _ => Err(CliError::InvalidAssignment(assignment.clone())),
        })
        .collect()
}

impl FormatCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let kind = resolve_kind(&self.kind)?;
        let values = parse_assignments(&self.values)?;
        let id = kind.format(&values).map_err(CliError::Registry)?;

        match ctx.format {
            OutputFormat::Json => print_single(&serde_json::json!({
                "kind": kind.key(),
                "id": id,
            })),
            OutputFormat::Table => println!("{}", id),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignments() {
        let values = parse_assignments(&[
            "subscriptionId=sub".to_string(),
            "resourceGroupName=a=b".to_string(),
        ])
        .unwrap();
        assert_eq!(values["subscriptionId"], "sub");
        assert_eq!(values["resourceGroupName"], "a=b");
    }

    #[test]
    fn test_parse_assignments_rejects_bare_words() {
        assert!(matches!(
            parse_assignments(&["subscriptionId".to_string()]),
            Err(CliError::InvalidAssignment(_))
        ));
        assert!(matches!(
            parse_assignments(&["=value".to_string()]),
            Err(CliError::InvalidAssignment(_))
        ));
    }
}
