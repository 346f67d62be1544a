//! Parse IDs and print their fields.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_output, print_single, OutputFormat};

use super::{resolve_kind, CommandContext};

/// Parse IDs and print their fields.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Kind key or type name (see `armid kinds`).
    kind: String,

    /// Resource IDs to parse.
    #[arg(required = true)]
    ids: Vec<String>,

    /// Match literal segments ignoring case (for IDs returned by the API).
    #[arg(long)]
    insensitive: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,

    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Debug, Serialize)]
struct ParsedId {
    input: String,
    id: String,
    fields: Vec<FieldRow>,
}

impl ParseCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let kind = resolve_kind(&self.kind)?;
        let insensitively = ctx.insensitive(self.insensitive);

        let mut parsed = Vec::with_capacity(self.ids.len());
        for input in self.ids {
            debug!(kind = %kind.key(), %input, insensitively, "Parsing");
            let values = kind
                .parse(&input, insensitively)
                .map_err(CliError::Registry)?;
            let id = kind.format(
                &values
                    .iter()
                    .map(|(field, value)| (field.to_string(), value.clone()))
                    .collect(),
            )?;
            parsed.push(ParsedId {
                input,
                id,
                fields: values
                    .into_iter()
                    .map(|(field, value)| FieldRow { field, value })
                    .collect(),
            });
        }

        match ctx.format {
            OutputFormat::Json => print_single(&parsed),
            OutputFormat::Table => {
                for (i, item) in parsed.iter().enumerate() {
                    if i > 0 {
                        println!();
                    }
                    println!("{}", item.id);
                    print_output(&item.fields, ctx.format);
                }
            }
        }
        Ok(())
    }
}
