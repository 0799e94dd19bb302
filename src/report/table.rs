use crate::catalog::{Catalog, CatalogEntry};
use crate::model::level::LevelKind;

/// Leaderboard table for the whole catalog, fragments in catalog order.
pub fn render_levels_table(catalog: &Catalog) -> String {
    let mut out = String::new();
    for entry in catalog.entries() {
        out.push_str(&render_entry(entry));
    }
    out
}

pub fn render_entry(entry: &CatalogEntry) -> String {
    match entry.kind {
        LevelKind::Title(third) => render_title(&entry.name, third.label()),
        LevelKind::Normal | LevelKind::Production => {
            let frontier = entry.frontier().map(|f| f.simple_str()).unwrap_or_default();
            let rows = entry.summary().map(|s| s.render_rows()).unwrap_or_default();
            format!("[**{}**](##Frontier: {}##){}|\n", entry.name, frontier, rows)
        }
    }
}

fn render_title(name: &str, third_label: &str) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("##{}\n\n", name));
    out.push_str(&format!("Name|Cost|Cycles|{}|Sum\n", third_label));
    out.push_str(":-|:-|:-|:-|:-\n");
    out
}
