//! Validate IDs and report a verdict for each.

use std::path::PathBuf;

use anyhow::{Context, Result};
use arm_resource_manager::ResourceKind;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::{info, warn};

use crate::error::CliError;
use crate::output::{print_output, print_single, print_success, verdict, OutputFormat};

use super::{resolve_kind, CommandContext};

/// Validate IDs and report a verdict for each.
///
/// Exits non-zero if any ID fails.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Kind key or type name (see `armid kinds`).
    kind: String,

    /// Resource IDs to validate.
    ids: Vec<String>,

    /// Read IDs from a file, one per line. Blank lines and lines starting
    /// with `#` are skipped.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Match literal segments ignoring case (for IDs returned by the API).
    #[arg(long)]
    insensitive: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    kind: String,
    total: usize,
    failed: usize,
    results: Vec<Outcome>,
}

#[derive(Debug, Serialize)]
struct Outcome {
    id: String,
    valid: bool,
    error: Option<String>,
}

#[derive(Serialize, Tabled)]
struct OutcomeRow<'a> {
    #[tabled(rename = "Result")]
    verdict: String,

    #[tabled(rename = "ID")]
    id: &'a str,

    #[tabled(rename = "Error")]
    error: &'a str,
}

/// IDs listed in a file body.
fn ids_from_lines(contents: &str) -> impl Iterator<Item = String> + '_ {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
}

fn check(kind: &ResourceKind, id: String, insensitively: bool) -> Outcome {
    match kind.parse(&id, insensitively) {
        Ok(_) => Outcome {
            id,
            valid: true,
            error: None,
        },
        Err(e) => {
            warn!(kind = %kind.key(), %id, error = %e, "Invalid resource ID");
            Outcome {
                id,
                valid: false,
                error: Some(e.to_string()),
            }
        }
    }
}

impl ValidateCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let kind = resolve_kind(&self.kind)?;
        let insensitively = ctx.insensitive(self.insensitive);

        let mut ids = self.ids;
        if let Some(path) = &self.file {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            ids.extend(ids_from_lines(&contents));
        }
        if ids.is_empty() {
            return Err(CliError::NoInput.into());
        }

        let results: Vec<Outcome> = ids
            .into_iter()
            .map(|id| check(kind, id, insensitively))
            .collect();
        let report = Report {
            kind: kind.key(),
            total: results.len(),
            failed: results.iter().filter(|r| !r.valid).count(),
            results,
        };
        info!(kind = %report.kind, total = report.total, failed = report.failed, "Validation finished");

        match ctx.format {
            OutputFormat::Json => print_single(&report),
            OutputFormat::Table => {
                let rows: Vec<OutcomeRow<'_>> = report
                    .results
                    .iter()
                    .map(|r| OutcomeRow {
                        verdict: verdict(r.valid),
                        id: &r.id,
                        error: r.error.as_deref().unwrap_or("-"),
                    })
                    .collect();
                print_output(&rows, ctx.format);
                println!();
                if report.failed == 0 {
                    print_success(&format!("{} valid", report.total));
                } else {
                    println!("{} checked, {} failed", report.total, report.failed);
                }
            }
        }

        if report.failed > 0 {
            return Err(CliError::ValidationFailed {
                failed: report.failed,
                total: report.total,
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const SNAPSHOT: &str = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group/providers/Microsoft.ElasticSan/elasticSans/elasticSanValue/volumeGroups/volumeGroupValue/snapshots/snapshotValue";

    #[test]
    fn test_ids_from_lines() {
        let contents = "# exported ids\n\n  /a/b  \n#/c\n/d\n";
        let ids: Vec<String> = ids_from_lines(contents).collect();
        assert_eq!(ids, vec!["/a/b".to_string(), "/d".to_string()]);
    }

    #[rstest]
    #[case(SNAPSHOT, false, true)]
    #[case("/SUBSCRIPTIONS/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group/providers/Microsoft.ElasticSan/elasticSans/elasticSanValue/volumeGroups/volumeGroupValue/snapshots/snapshotValue", false, false)]
    #[case("/SUBSCRIPTIONS/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group/providers/Microsoft.ElasticSan/elasticSans/elasticSanValue/volumeGroups/volumeGroupValue/snapshots/snapshotValue", true, true)]
    #[case("/subscriptions/12345678-1234-9876-4563-123456789012", false, false)]
    fn test_check(#[case] id: &str, #[case] insensitively: bool, #[case] valid: bool) {
        let kind = resolve_kind("elasticsan/2023-01-01/snapshots/SnapshotId").unwrap();
        let outcome = check(kind, id.to_string(), insensitively);
        assert_eq!(outcome.valid, valid);
        assert_eq!(outcome.error.is_some(), !valid);
    }
}
