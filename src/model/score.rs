use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::model::frontier::SCORES_DELIM;
use crate::model::level::LevelKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("invalid score {a}/{b}/{c}: statistics must be non-negative")]
    InvalidScore { a: i64, b: i64, c: i64 },
    #[error("invalid reference {0:?}: contains the snapshot separator")]
    InvalidReference(String),
}

/// Who wins when two scores carry identical statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// An existing score holds off an identical newcomer only when it is
    /// strictly better documented.
    Retain,
    /// A newcomer replaces an identical existing score when it is at least
    /// as well documented.
    Evict,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Score {
    stats: [u64; 3],
    reference: Option<String>,
}

static CANONICAL: OnceLock<Regex> = OnceLock::new();

fn canonical_pattern() -> &'static Regex {
    CANONICAL.get_or_init(|| {
        Regex::new(r"^(\d+)/(\d+)/(\d+)(?: (.+\..+))?").expect("valid regex")
    })
}

impl Score {
    pub fn new(a: i64, b: i64, c: i64, reference: Option<String>) -> Result<Self, ScoreError> {
        if a < 0 || b < 0 || c < 0 {
            return Err(ScoreError::InvalidScore { a, b, c });
        }
        if let Some(link) = reference.as_deref().filter(|l| l.contains(SCORES_DELIM)) {
            return Err(ScoreError::InvalidReference(link.to_string()));
        }
        Ok(Self {
            stats: [a as u64, b as u64, c as u64],
            reference,
        })
    }

    /// Builds a score from the 3- or 4-field submission convention. The
    /// fourth value replaces the third only on production levels.
    pub fn from_four(
        cost: i64,
        cycles: i64,
        third: i64,
        fourth: Option<i64>,
        kind: LevelKind,
        reference: Option<String>,
    ) -> Result<Self, ScoreError> {
        match (kind, fourth) {
            (LevelKind::Production, Some(instructions)) => {
                Self::new(cost, cycles, instructions, reference)
            }
            _ => Self::new(cost, cycles, third, reference),
        }
    }

    /// Parses `a/b/c[ reference]`. Returns `None` when the text does not
    /// start with a score.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = canonical_pattern().captures(text)?;
        let a = caps[1].parse::<i64>().ok()?;
        let b = caps[2].parse::<i64>().ok()?;
        let c = caps[3].parse::<i64>().ok()?;
        let reference = caps.get(4).map(|m| m.as_str().to_string());
        Self::new(a, b, c, reference).ok()
    }

    pub fn stats(&self) -> [u64; 3] {
        self.stats
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn is_documented(&self) -> bool {
        self.reference.is_some()
    }

    pub fn sum(&self) -> u128 {
        self.stats.iter().map(|&s| s as u128).sum()
    }

    /// Product of the two axes other than `axis`.
    pub fn product_excluding(&self, axis: usize) -> u128 {
        let mut product = 1u128;
        for (i, &s) in self.stats.iter().enumerate() {
            if i != axis {
                product *= s as u128;
            }
        }
        product
    }

    pub fn dominates(&self, other: &Score, tie: TieBreak) -> bool {
        if self.stats.iter().zip(other.stats.iter()).any(|(a, b)| a > b) {
            return false;
        }
        if self.stats != other.stats {
            return true;
        }
        match tie {
            TieBreak::Retain => self.is_documented() && !other.is_documented(),
            TieBreak::Evict => self.is_documented() >= other.is_documented(),
        }
    }

    pub fn simple_str(&self) -> String {
        format!("{}/{}/{}", self.stats[0], self.stats[1], self.stats[2])
    }

    /// Storage form: `a/b/c reference`.
    pub fn compact_str(&self) -> String {
        match &self.reference {
            Some(link) => format!("{} {}", self.simple_str(), link),
            None => self.simple_str(),
        }
    }
}

/// Display form: `[a/b/c](reference)`, or the bare block without one.
impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reference {
            Some(link) => write!(f, "[{}]({})", self.simple_str(), link),
            None => f.write_str(&self.simple_str()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/score.rs"]
mod tests;
