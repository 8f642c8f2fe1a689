use std::collections::HashSet;

use playtime::domain::{GameId, GameWithTime};

use super::index::GameSearchIndex;
use super::pattern::search_pattern;

/// The game picker's membership predicate.
///
/// Before any search has been entered the filter accepts every game, so the
/// full catalog is browsable. Once a query runs, only ids matched by the
/// index pass.
#[derive(Debug, Clone, Default)]
pub enum GameFilter {
    #[default]
    AcceptAll,
    Matching(HashSet<GameId>),
}

impl GameFilter {
    /// Build a filter from a free-text query via the wildcard pattern syntax.
    pub fn from_query(index: &GameSearchIndex, query: &str) -> Self {
        Self::Matching(index.search(&search_pattern(query)))
    }

    pub fn matches(&self, entry: &GameWithTime) -> bool {
        match self {
            GameFilter::AcceptAll => true,
            GameFilter::Matching(ids) => ids.contains(&entry.game.id),
        }
    }
}
