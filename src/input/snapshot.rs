use std::path::Path;

use crate::catalog::Catalog;
use crate::input::csv::{format_record, parse_table};
use crate::input::{InputError, read_text};

/// Merges a `name,scores` snapshot into the catalog; returns the number of
/// score tokens that parsed.
pub fn load_snapshot(path: &Path, catalog: &mut Catalog) -> Result<usize, InputError> {
    let text = read_text(path)?;
    apply_snapshot(&text, &path.display().to_string(), catalog)
}

pub fn apply_snapshot(text: &str, source: &str, catalog: &mut Catalog) -> Result<usize, InputError> {
    let table = parse_table(text, source)?;
    let name_col = table.require_column("name", source)?;
    let scores_col = table.require_column("scores", source)?;

    let mut parsed = 0usize;
    for row in &table.rows {
        let name = row.get(name_col);
        parsed += catalog.restore(name, row.get(scores_col))?;
    }
    Ok(parsed)
}

/// Snapshot file contents for every non-title level, in catalog order.
pub fn format_snapshot(catalog: &Catalog) -> String {
    let mut out = format_record(&["name", "scores"]);
    for (name, encoded) in catalog.snapshot() {
        out.push_str(&format_record(&[name, encoded.as_str()]));
    }
    out
}
