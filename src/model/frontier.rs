use crate::model::score::{Score, TieBreak};

/// Separator between scores in the snapshot encoding.
pub const SCORES_DELIM: &str = " - ";

/// Pareto frontier of one level: no member dominates another, members are
/// sorted ascending by stats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontier {
    scores: Vec<Score>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a candidate. Returns `false` when an existing score holds it
    /// off and the frontier is left untouched.
    pub fn insert(&mut self, candidate: Score) -> bool {
        if self
            .scores
            .iter()
            .any(|old| old.dominates(&candidate, TieBreak::Retain))
        {
            return false;
        }

        self.scores
            .retain(|old| !candidate.dominates(old, TieBreak::Evict));
        self.scores.push(candidate);
        self.scores.sort_by_key(|s| s.stats());
        true
    }

    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Snapshot form: compact renderings joined by [`SCORES_DELIM`].
    pub fn encode(&self) -> String {
        self.scores
            .iter()
            .map(Score::compact_str)
            .collect::<Vec<_>>()
            .join(SCORES_DELIM)
    }

    /// Inserts every score found in [`Frontier::encode`] output; returns how
    /// many tokens parsed. Tokens that do not parse as scores are skipped.
    pub fn extend_from_encoded(&mut self, encoded: &str) -> usize {
        let mut parsed = 0usize;
        for token in encoded.split(SCORES_DELIM) {
            match Score::parse(token) {
                Some(score) => {
                    parsed += 1;
                    self.insert(score);
                }
                None => {
                    if !token.trim().is_empty() {
                        tracing::debug!("skipping unparsable snapshot token {:?}", token);
                    }
                }
            }
        }
        parsed
    }

    /// Space-separated bare stats, used as the hidden table annotation.
    pub fn simple_str(&self) -> String {
        self.scores
            .iter()
            .map(Score::simple_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/frontier.rs"]
mod tests;
