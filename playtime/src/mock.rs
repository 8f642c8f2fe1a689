//! Mock play time source for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use tracing::debug;

use crate::domain::{filters::BoxedExcludeFilter, Catalog, GameId, GameWithTime, PlayTimeCorrection};
use crate::source::{PlayTimeError, PlayTimeSource};

/// In-memory [`PlayTimeSource`] backed by a HashMap.
///
/// # Examples
///
/// ```
/// use playtime::MockPlayTimeSource;
/// use playtime::domain::{Game, GameWithTime};
///
/// let source = MockPlayTimeSource::new()
///     .with_games(vec![GameWithTime::new(Game::new("570", "Dota 2"), 3600)]);
/// ```
#[derive(Clone, Default)]
pub struct MockPlayTimeSource {
    games: Arc<RwLock<HashMap<GameId, GameWithTime>>>,
    applied: Arc<RwLock<Vec<PlayTimeCorrection>>>,
    fail_fetch: Arc<AtomicBool>,
    fail_corrections: Arc<AtomicBool>,
}

impl MockPlayTimeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the source with catalog entries.
    pub fn with_games(self, games: Vec<GameWithTime>) -> Self {
        {
            let mut map = self.games.write().unwrap();
            for entry in games {
                map.insert(entry.game.id.clone(), entry);
            }
        }
        self
    }

    /// Make subsequent catalog fetches fail.
    pub fn fail_fetch(self) -> Self {
        self.fail_fetch.store(true, Ordering::SeqCst);
        self
    }

    /// Make subsequent correction calls fail.
    pub fn fail_corrections(self) -> Self {
        self.fail_corrections.store(true, Ordering::SeqCst);
        self
    }

    /// Corrections applied so far, in call order (for test assertions).
    pub fn applied(&self) -> Vec<PlayTimeCorrection> {
        self.applied.read().unwrap().clone()
    }
}

#[async_trait]
impl PlayTimeSource for MockPlayTimeSource {
    async fn fetch_all_play_time(
        &self,
        excludes: &[BoxedExcludeFilter],
    ) -> Result<Catalog, PlayTimeError> {
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(PlayTimeError::FetchFailed("mock fetch failure".to_string()));
        }

        let games = self.games.read().unwrap();
        Ok(games
            .iter()
            .filter(|(_, entry)| !excludes.iter().any(|f| f.excludes(entry)))
            .map(|(id, entry)| (id.clone(), entry.clone()))
            .collect())
    }

    async fn apply_time_correction(
        &self,
        correction: &PlayTimeCorrection,
    ) -> Result<(), PlayTimeError> {
        if self.fail_corrections.load(Ordering::SeqCst) {
            return Err(PlayTimeError::CorrectionFailed(
                "mock correction failure".to_string(),
            ));
        }

        debug!(game = %correction.game.id, time_sec = correction.time_sec, "applying mock correction");

        // Persist like the real provider: the corrected value becomes the
        // tracked value on the next fetch.
        {
            let mut games = self.games.write().unwrap();
            if let Some(entry) = games.get_mut(&correction.game.id) {
                entry.time_sec = correction.time_sec;
            }
        }
        self.applied.write().unwrap().push(correction.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filters::GameIdFilter;
    use crate::domain::Game;

    fn seeded() -> MockPlayTimeSource {
        MockPlayTimeSource::new().with_games(vec![
            GameWithTime::new(Game::new("a", "Alpha"), 3600),
            GameWithTime::new(Game::new("b", "Beta"), 0),
        ])
    }

    #[tokio::test]
    async fn fetch_returns_seeded_catalog() {
        let source = seeded();
        let catalog = source.fetch_all_play_time(&[]).await.unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[&GameId::from("a")].time_sec, 3600);
    }

    #[tokio::test]
    async fn fetch_applies_exclusion_filters() {
        let source = seeded();
        let excludes: Vec<BoxedExcludeFilter> =
            vec![Box::new(GameIdFilter::new([GameId::from("b")]))];

        let catalog = source.fetch_all_play_time(&excludes).await.unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains_key(&GameId::from("a")));
    }

    #[tokio::test]
    async fn fetch_failure_propagates() {
        let source = seeded().fail_fetch();
        let result = source.fetch_all_play_time(&[]).await;
        assert!(matches!(result, Err(PlayTimeError::FetchFailed(_))));
    }

    #[tokio::test]
    async fn correction_is_recorded_and_persisted() {
        let source = seeded();
        let correction = PlayTimeCorrection::new(Game::new("a", "Alpha"), 18_000);
        source.apply_time_correction(&correction).await.unwrap();

        assert_eq!(source.applied(), vec![correction]);
        let catalog = source.fetch_all_play_time(&[]).await.unwrap();
        assert_eq!(catalog[&GameId::from("a")].time_sec, 18_000);
    }

    #[tokio::test]
    async fn correction_failure_records_nothing() {
        let source = seeded().fail_corrections();
        let correction = PlayTimeCorrection::new(Game::new("a", "Alpha"), 18_000);

        let result = source.apply_time_correction(&correction).await;
        assert!(matches!(result, Err(PlayTimeError::CorrectionFailed(_))));
        assert!(source.applied().is_empty());
    }
}
