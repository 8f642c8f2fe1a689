use super::ExcludeFilter;
use crate::domain::GameWithTime;

/// Excludes titles whose name starts with a given prefix, e.g. tooling
/// shortcuts the platform lists alongside real games.
pub struct NamePrefixFilter {
    prefix: String,
}

impl NamePrefixFilter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl ExcludeFilter for NamePrefixFilter {
    fn excludes(&self, entry: &GameWithTime) -> bool {
        entry.game.name.starts_with(&self.prefix)
    }
}
