//! Show the segment template of a kind.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_output, print_single, OutputFormat};

use super::{resolve_kind, CommandContext};

/// Show the segment template of a kind.
#[derive(Debug, Args)]
pub struct SegmentsCommand {
    /// Kind key or type name (see `armid kinds`).
    kind: String,
}

#[derive(Debug, Serialize, Tabled)]
struct SegmentRow {
    #[tabled(rename = "Name")]
    name: &'static str,

    #[tabled(rename = "Type")]
    segment_type: String,

    #[tabled(rename = "Fixed Value", display = "display_option")]
    fixed_value: Option<&'static str>,

    #[tabled(rename = "Example")]
    example_value: &'static str,
}

fn display_option(opt: &Option<&'static str>) -> String {
    opt.unwrap_or("-").to_string()
}

impl SegmentsCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let kind = resolve_kind(&self.kind)?;
        let rows: Vec<SegmentRow> = kind
            .segments
            .iter()
            .map(|segment| SegmentRow {
                name: segment.name(),
                segment_type: segment.segment_type().to_string(),
                fixed_value: segment.fixed_value(),
                example_value: segment.example_value(),
            })
            .collect();

        match ctx.format {
            OutputFormat::Json => print_single(&serde_json::json!({
                "kind": kind.key(),
                "resource": kind.resource,
                "example": kind.example_id(),
                "segments": rows,
            })),
            OutputFormat::Table => {
                println!("{} ({})", kind.resource, kind.key());
                println!("{}\n", kind.example_id());
                print_output(&rows, ctx.format);
            }
        }
        Ok(())
    }
}
