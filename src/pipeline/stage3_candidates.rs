use std::path::Path;

use crate::catalog::{Catalog, CatalogError};
use crate::input::InputError;
use crate::input::candidates::{Candidate, CandidateFilter, load_candidates};
use crate::input::trusted::SubmitterPolicy;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stage3Stats {
    pub accepted: usize,
    pub rejected: usize,
    pub invalid: usize,
    pub skipped: usize,
    pub untrusted: usize,
    pub stale: usize,
}

pub struct Stage3Input<'a> {
    pub candidates_path: &'a Path,
    pub submitters: &'a SubmitterPolicy,
    pub newer_than: Option<f64>,
}

pub fn run_stage3(input: &Stage3Input<'_>, catalog: &mut Catalog) -> Result<Stage3Stats, InputError> {
    let filter = CandidateFilter {
        submitters: input.submitters,
        newer_than: input.newer_than,
    };
    let batch = load_candidates(input.candidates_path, catalog, &filter)?;

    let mut stats = fold_candidates(&batch.candidates, catalog)?;
    stats.invalid = batch.invalid;
    stats.skipped = batch.unparsed + batch.unknown_level;
    stats.untrusted = batch.untrusted;
    stats.stale = batch.stale;

    tracing::info!(
        "candidates: {} accepted, {} dominated, {} invalid, {} skipped, {} untrusted, {} already seen",
        stats.accepted,
        stats.rejected,
        stats.invalid,
        stats.skipped,
        stats.untrusted,
        stats.stale
    );
    Ok(stats)
}

/// Offers candidates to the catalog one at a time, in arrival order.
pub fn fold_candidates(
    candidates: &[Candidate],
    catalog: &mut Catalog,
) -> Result<Stage3Stats, CatalogError> {
    let mut stats = Stage3Stats::default();
    for candidate in candidates {
        if catalog.insert(&candidate.level, candidate.score.clone())? {
            tracing::debug!(
                "line {}: {} joins {} (submitted by {})",
                candidate.line_no,
                candidate.score.compact_str(),
                candidate.level,
                candidate.submitter.as_deref().unwrap_or("unknown")
            );
            stats.accepted += 1;
        } else {
            tracing::debug!(
                "line {}: {} dominated on {}",
                candidate.line_no,
                candidate.score.compact_str(),
                candidate.level
            );
            stats.rejected += 1;
        }
    }
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_candidates.rs"]
mod tests;
