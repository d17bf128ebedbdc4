//! Result rendering - text table or JSON

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table as TextTable;
use rentalctl_catalog::{Record, Table};
use serde::{Deserialize, Serialize};

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bordered text table with a header row
    #[default]
    Table,
    /// Pretty-printed JSON array of row objects
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    }
}

/// Write `table` to `out` in the requested format.
///
/// An empty result still prints its header (or `[]`).
pub fn render<R: Record, W: Write>(table: &Table<R>, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let mut text = TextTable::new();
            text.load_preset(UTF8_FULL)
                .set_header(table.columns().iter().copied());
            for row in table.cells() {
                text.add_row(row.iter().map(ToString::to_string).collect::<Vec<_>>());
            }
            writeln!(out, "{}", text)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, table)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
