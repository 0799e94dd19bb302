use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::catalog::Catalog;
use crate::input::trusted::SubmitterPolicy;
use crate::input::{InputError, read_text};
use crate::model::score::Score;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub line_no: usize,
    pub level: String,
    pub score: Score,
    pub submitter: Option<String>,
}

/// Candidates in arrival order plus counts of what was dropped on the way.
#[derive(Debug, Clone, Default)]
pub struct CandidateBatch {
    pub candidates: Vec<Candidate>,
    pub unparsed: usize,
    pub invalid: usize,
    pub unknown_level: usize,
    pub untrusted: usize,
    pub stale: usize,
}

/// Who and what may enter the frontiers.
#[derive(Debug, Clone, Copy)]
pub struct CandidateFilter<'a> {
    pub submitters: &'a SubmitterPolicy,
    /// Lines stamped at or before this unix time were seen by an earlier run.
    pub newer_than: Option<f64>,
}

impl CandidateFilter<'_> {
    fn is_stale(&self, stamp: Option<f64>) -> bool {
        matches!((self.newer_than, stamp), (Some(last), Some(ts)) if ts <= last)
    }
}

static SUBMISSION: OnceLock<Regex> = OnceLock::new();

fn submission_pattern() -> &'static Regex {
    SUBMISSION.get_or_init(|| {
        Regex::new(r"^(-?\d+)/(-?\d+)/(-?\d+)(?:/(-?\d+))?(?:\s+(\S+))?\s*$").expect("valid regex")
    })
}

/// A trailing token counts as a reference only when it looks like a link.
fn as_reference(token: &str) -> Option<String> {
    let (head, tail) = token.rsplit_once('.')?;
    (!head.is_empty() && !tail.is_empty()).then(|| token.to_string())
}

pub fn load_candidates(
    path: &Path,
    catalog: &Catalog,
    filter: &CandidateFilter<'_>,
) -> Result<CandidateBatch, InputError> {
    let text = read_text(path)?;
    Ok(parse_candidates(&text, catalog, filter))
}

/// Reads `<level>\t<a/b/c[/d][ reference]>[\t<submitter>[\t<unix time>]]`
/// lines. Lines naming unknown or title levels, untrusted submitters or
/// already-seen stamps are dropped here so only valid pairs reach the catalog.
pub fn parse_candidates(
    text: &str,
    catalog: &Catalog,
    filter: &CandidateFilter<'_>,
) -> CandidateBatch {
    let mut batch = CandidateBatch::default();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut columns = line.split('\t');
        let level = columns.next().unwrap_or_default().trim();
        let Some(score_text) = columns.next() else {
            tracing::info!("N: line {}: no level/score separator", line_no);
            batch.unparsed += 1;
            continue;
        };
        let submitter = columns.next().map(str::trim).filter(|s| !s.is_empty());
        let stamp = match columns.next().map(str::trim).filter(|s| !s.is_empty()) {
            Some(text) => match text.parse::<f64>() {
                Ok(ts) => Some(ts),
                Err(_) => {
                    tracing::info!("N: line {}: bad timestamp {:?}", line_no, text);
                    batch.unparsed += 1;
                    continue;
                }
            },
            None => None,
        };

        if !filter.submitters.admits(submitter) {
            tracing::debug!("line {}: submitter {:?} is not trusted", line_no, submitter);
            batch.untrusted += 1;
            continue;
        }
        if filter.is_stale(stamp) {
            tracing::debug!("line {}: seen by an earlier run", line_no);
            batch.stale += 1;
            continue;
        }

        let kind = match catalog.kind_of(level) {
            Some(kind) if kind.is_level() => kind,
            _ => {
                tracing::warn!("line {}: {:?} is not a scored level, skipping", line_no, level);
                batch.unknown_level += 1;
                continue;
            }
        };

        let Some(caps) = submission_pattern().captures(score_text.trim()) else {
            tracing::info!("N: line {}: {}", line_no, raw);
            batch.unparsed += 1;
            continue;
        };

        let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<i64>().ok());
        let (Some(cost), Some(cycles), Some(third)) = (field(1), field(2), field(3)) else {
            tracing::info!("N: line {}: statistic out of range", line_no);
            batch.unparsed += 1;
            continue;
        };
        let fourth = field(4);
        if caps.get(4).is_some() && fourth.is_none() {
            tracing::info!("N: line {}: statistic out of range", line_no);
            batch.unparsed += 1;
            continue;
        }
        let reference = caps.get(5).and_then(|m| as_reference(m.as_str()));

        match Score::from_four(cost, cycles, third, fourth, kind, reference) {
            Ok(score) => {
                tracing::info!("Y: line {}: {} {}", line_no, level, score.compact_str());
                batch.candidates.push(Candidate {
                    line_no,
                    level: level.to_string(),
                    score,
                    submitter: submitter.map(str::to_string),
                });
            }
            Err(err) => {
                tracing::warn!("line {}: {}", line_no, err);
                batch.invalid += 1;
            }
        }
    }

    batch
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/candidates.rs"]
mod tests;
