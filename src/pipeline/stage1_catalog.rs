use std::path::Path;

use crate::catalog::Catalog;
use crate::input::InputError;
use crate::input::levels::load_levels;

pub fn run_stage1(levels_path: &Path) -> Result<Catalog, InputError> {
    let levels = load_levels(levels_path)?;
    let catalog = Catalog::new(levels)?;
    if catalog.is_empty() {
        tracing::warn!("{} declares no levels", levels_path.display());
    }
    let n_titles = catalog
        .entries()
        .iter()
        .filter(|e| e.kind.is_title())
        .count();
    tracing::info!(
        "loaded {} catalog entries ({} scored levels, {} section titles) from {}",
        catalog.len(),
        catalog.len() - n_titles,
        n_titles,
        levels_path.display()
    );
    Ok(catalog)
}
