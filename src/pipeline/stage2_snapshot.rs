use std::path::Path;

use crate::catalog::Catalog;
use crate::input::InputError;
use crate::input::snapshot::load_snapshot;

/// Restores frontiers from the previous run. A missing snapshot file is not
/// an error: the run starts from empty frontiers.
pub fn run_stage2(scores_path: &Path, catalog: &mut Catalog) -> Result<usize, InputError> {
    if !scores_path.is_file() {
        tracing::warn!(
            "snapshot {} not found; starting from empty frontiers",
            scores_path.display()
        );
        return Ok(0);
    }
    let parsed = load_snapshot(scores_path, catalog)?;
    let n_unscored = catalog
        .entries()
        .iter()
        .filter_map(|e| e.frontier())
        .filter(|f| f.is_empty())
        .count();
    tracing::info!(
        "restored {} snapshot scores, {} survive on the frontiers, {} levels still unscored",
        parsed,
        catalog.total_scores(),
        n_unscored
    );
    Ok(parsed)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_snapshot.rs"]
mod tests;
