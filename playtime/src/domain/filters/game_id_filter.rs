use std::collections::HashSet;

use super::ExcludeFilter;
use crate::domain::{GameId, GameWithTime};

/// Excludes an explicit set of game ids from the catalog.
///
/// Used to drop the host application's own entry, which the platform
/// reports play time for like any other title.
pub struct GameIdFilter {
    ids: HashSet<GameId>,
}

impl GameIdFilter {
    pub fn new(ids: impl IntoIterator<Item = GameId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }
}

impl ExcludeFilter for GameIdFilter {
    fn excludes(&self, entry: &GameWithTime) -> bool {
        self.ids.contains(&entry.game.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Game;

    #[test]
    fn excludes_listed_ids_only() {
        let filter = GameIdFilter::new([GameId::from("shell")]);

        let shell = GameWithTime::new(Game::new("shell", "Shell"), 10);
        let game = GameWithTime::new(Game::new("570", "Dota 2"), 10);

        assert!(filter.excludes(&shell));
        assert!(!filter.excludes(&game));
    }
}
