use std::path::Path;

use crate::input::csv::parse_table;
use crate::input::{InputError, read_text};
use crate::model::level::LevelKind;

pub fn load_levels(path: &Path) -> Result<Vec<(String, LevelKind)>, InputError> {
    let text = read_text(path)?;
    parse_levels(&text, &path.display().to_string())
}

/// Parses a `name,type` catalog in declaration order.
pub fn parse_levels(text: &str, source: &str) -> Result<Vec<(String, LevelKind)>, InputError> {
    let table = parse_table(text, source)?;
    let name_col = table.require_column("name", source)?;
    let type_col = table.require_column("type", source)?;

    let mut levels = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let name = row.get(name_col).trim();
        if name.is_empty() {
            tracing::warn!("empty level name on line {}, skipping", row.line_no);
            continue;
        }
        let raw_kind = row.get(type_col);
        let kind = LevelKind::from_catalog_name(raw_kind).ok_or_else(|| {
            InputError::UnknownKind {
                kind: raw_kind.to_string(),
                line_no: row.line_no,
            }
        })?;
        levels.push((name.to_string(), kind));
    }

    tracing::debug!("{}: {} catalog entries", source, levels.len());
    Ok(levels)
}
