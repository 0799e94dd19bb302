use std::collections::HashSet;
use std::path::Path;

use crate::input::{InputError, read_text};

/// Submitter names whose candidates are accepted, one per line in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustedUsers {
    names: HashSet<String>,
}

impl TrustedUsers {
    pub fn parse(text: &str) -> Self {
        let names = text
            .lines()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

pub fn load_trusted_users(path: &Path) -> Result<TrustedUsers, InputError> {
    let users = TrustedUsers::parse(&read_text(path)?);
    if users.is_empty() {
        tracing::warn!("{} lists no trusted users", path.display());
    }
    tracing::info!("{} trusted users from {}", users.len(), path.display());
    Ok(users)
}

/// Which submitters may feed the frontiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitterPolicy {
    Everybody,
    Trusted(TrustedUsers),
}

impl SubmitterPolicy {
    /// A line without a submitter is admitted only when everybody is trusted.
    pub fn admits(&self, submitter: Option<&str>) -> bool {
        match self {
            SubmitterPolicy::Everybody => true,
            SubmitterPolicy::Trusted(users) => submitter.is_some_and(|name| users.contains(name)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/trusted.rs"]
mod tests;
