use std::collections::HashMap;

use thiserror::Error;

use crate::model::frontier::Frontier;
use crate::model::level::LevelKind;
use crate::model::score::Score;
use crate::model::summary::ExtremalSummary;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown level: {0}")]
    UnknownLevel(String),
    #[error("level {0} is a section title and carries no scores")]
    NotScored(String),
    #[error("level {0} is declared more than once")]
    DuplicateLevel(String),
}

#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub name: String,
    pub kind: LevelKind,
    frontier: Option<Frontier>,
}

impl CatalogEntry {
    /// `None` for section titles.
    pub fn frontier(&self) -> Option<&Frontier> {
        self.frontier.as_ref()
    }

    pub fn summary(&self) -> Option<ExtremalSummary> {
        self.frontier
            .as_ref()
            .map(|f| ExtremalSummary::from_scores(f.scores()))
    }
}

/// Levels in declaration order, each non-title level owning its frontier.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new<I>(levels: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (String, LevelKind)>,
    {
        let mut catalog = Self::default();
        for (name, kind) in levels {
            if catalog.index.contains_key(&name) {
                return Err(CatalogError::DuplicateLevel(name));
            }
            catalog.index.insert(name.clone(), catalog.entries.len());
            catalog.entries.push(CatalogEntry {
                name,
                kind,
                frontier: kind.is_level().then(Frontier::new),
            });
        }
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.index.get(name).map(|&idx| &self.entries[idx])
    }

    pub fn kind_of(&self, name: &str) -> Option<LevelKind> {
        self.get(name).map(|e| e.kind)
    }

    fn frontier_mut(&mut self, name: &str) -> Result<&mut Frontier, CatalogError> {
        let idx = *self
            .index
            .get(name)
            .ok_or_else(|| CatalogError::UnknownLevel(name.to_string()))?;
        self.entries[idx]
            .frontier
            .as_mut()
            .ok_or_else(|| CatalogError::NotScored(name.to_string()))
    }

    /// Offers a score to a level's frontier; `Ok(false)` when it was held off.
    pub fn insert(&mut self, level: &str, score: Score) -> Result<bool, CatalogError> {
        Ok(self.frontier_mut(level)?.insert(score))
    }

    /// Merges an encoded snapshot into a level; returns how many tokens parsed.
    pub fn restore(&mut self, level: &str, encoded: &str) -> Result<usize, CatalogError> {
        Ok(self.frontier_mut(level)?.extend_from_encoded(encoded))
    }

    /// `(name, encoded frontier)` for every non-title level in catalog order.
    pub fn snapshot(&self) -> Vec<(&str, String)> {
        self.entries
            .iter()
            .filter_map(|e| e.frontier.as_ref().map(|f| (e.name.as_str(), f.encode())))
            .collect()
    }

    pub fn total_scores(&self) -> usize {
        self.entries
            .iter()
            .filter_map(|e| e.frontier.as_ref())
            .map(Frontier::len)
            .sum()
    }

    pub fn render_table(&self) -> String {
        crate::report::table::render_levels_table(self)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/catalog/tests.rs"]
mod tests;
