//! Export command for writing the table as TSV or JSON.

use std::path::Path;

use anyhow::Result;
use chartrange_core::export::{format_table_json, format_table_tsv};
use chartrange_core::{Config, Event};

use crate::app;
use crate::cli::ExportFormat;

/// Render the table with the persisted filters and export it
pub fn run(config: &Config, output: Option<&Path>, format: ExportFormat) -> Result<()> {
    let mut session = app::build_session(config, None)?;
    session.dispatch(Event::OptionsChanged(config.options.clone()))?;

    let rows = session.sink().rows();
    let content = match format {
        ExportFormat::Tsv => format_table_tsv(rows),
        ExportFormat::Json => format_table_json(rows)?,
    };

    if let Some(output_path) = output {
        std::fs::write(output_path, &content)?;
        eprintln!("Exported {} rows to: {}", rows.len(), output_path.display());
    } else {
        println!("{}", content);
    }

    Ok(())
}
