use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::catalog::Catalog;
use crate::input::snapshot::format_snapshot;
use crate::input::timestamp::format_timestamp;
use crate::report::ReportError;
use crate::report::document::assemble_document;
use crate::report::json::render_summary_json;

#[derive(Debug, Clone)]
pub struct Stage4Input<'a> {
    pub catalog: &'a Catalog,
    /// Snapshot destination; `None` leaves the previous snapshot alone.
    pub scores_path: Option<&'a Path>,
    /// Where the run's start time is recorded for the next run's cutoff.
    pub timestamp_path: Option<&'a Path>,
    pub out_dir: Option<&'a Path>,
    pub prefix_path: Option<&'a Path>,
    pub suffix_path: Option<&'a Path>,
    pub print: bool,
    pub built_at: DateTime<Utc>,
}

/// Writes every requested artifact and returns the rendered table.
pub fn write_reports(input: &Stage4Input<'_>) -> Result<String, ReportError> {
    if let Some(path) = input.scores_path {
        write_text(path, &format_snapshot(input.catalog))?;
        tracing::info!("wrote snapshot {}", path.display());
    }

    if let Some(path) = input.timestamp_path {
        write_text(path, &format_timestamp(input.built_at))?;
    }

    let table = input.catalog.render_table();

    if let Some(out_dir) = input.out_dir {
        fs::create_dir_all(out_dir)?;

        write_text(&out_dir.join("table.md"), &table)?;

        let prefix = read_optional(input.prefix_path)?;
        let suffix = read_optional(input.suffix_path)?;
        let document = assemble_document(&prefix, &table, input.built_at, &suffix);
        write_text(&out_dir.join("document.md"), &document)?;

        let json = render_summary_json(input.catalog)?;
        write_text(&out_dir.join("summary.json"), &json)?;

        tracing::info!("wrote reports to {}", out_dir.display());
    }

    if input.print {
        println!("{}", table);
    }

    Ok(table)
}

fn read_optional(path: Option<&Path>) -> Result<String, ReportError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => Ok(String::new()),
    }
}

fn write_text(path: &Path, contents: &str) -> Result<(), ReportError> {
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
