//! List registered resource kinds.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::CommandContext;

/// List registered resource kinds.
#[derive(Debug, Args)]
pub struct KindsCommand {
    /// Only list kinds of this provider (e.g. `web`, `commonids`).
    #[arg(long)]
    provider: Option<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct KindRow {
    #[tabled(rename = "Kind")]
    key: String,

    #[tabled(rename = "Resource")]
    resource: &'static str,

    #[tabled(rename = "Segments")]
    segments: usize,
}

impl KindsCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows: Vec<KindRow> = arm_resource_manager::kinds()
            .iter()
            .filter(|kind| {
                self.provider
                    .as_deref()
                    .map_or(true, |p| kind.provider.eq_ignore_ascii_case(p))
            })
            .map(|kind| KindRow {
                key: kind.key(),
                resource: kind.resource,
                segments: kind.segments.len(),
            })
            .collect();

        tracing::debug!(count = rows.len(), "Listing kinds");
        print_output(&rows, ctx.format);
        Ok(())
    }
}
