//! State and events of the manual adjustment page.
//!
//! The page owns its catalog snapshot, search index, filter and rows; the
//! host UI renders from this state and feeds user events back in. Everything
//! is single-threaded: one user-triggered event mutates the page at a time,
//! so no locking is needed.

mod commit;
mod row;

pub use commit::{CommitOutcome, CommitPolicy, MigrationPlan};
pub use row::{EditableRow, RowCorrectness};

use serde::Serialize;
use tracing::{info, warn};

use playtime::domain::{filters::BoxedExcludeFilter, Catalog, GameId};
use playtime::{human_readable_time, PlayTimeError, PlayTimeSource};

use crate::search::{GameFilter, GameSearchIndex};

/// Page configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageConfig {
    pub commit_policy: CommitPolicy,
}

/// One entry of the game picker dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameOption {
    pub id: GameId,
    pub label: String,
}

/// The manual play-time adjustment page.
///
/// Constructed by [`load`](Self::load), which awaits the catalog fetch from
/// the injected [`PlayTimeSource`] and builds the search index. The caller
/// shows its loading state until `load` resolves; a fetch error propagates
/// up to whatever error boundary the host provides.
pub struct AdjustTimePage<S> {
    source: S,
    catalog: Catalog,
    index: GameSearchIndex,
    filter: GameFilter,
    rows: Vec<EditableRow>,
    config: PageConfig,
}

impl<S: PlayTimeSource> AdjustTimePage<S> {
    /// Fetch the catalog, build the index and start with one empty row.
    pub async fn load(
        source: S,
        excludes: &[BoxedExcludeFilter],
        config: PageConfig,
    ) -> Result<Self, PlayTimeError> {
        let catalog = source.fetch_all_play_time(excludes).await?;
        let index = GameSearchIndex::build(&catalog);
        info!(games = catalog.len(), "loaded play time catalog");

        Ok(Self {
            source,
            catalog,
            index,
            filter: GameFilter::default(),
            rows: vec![EditableRow::default()],
            config,
        })
    }

    /// [`load`](Self::load) with no exclusions and the default config.
    pub async fn load_with_defaults(source: S) -> Result<Self, PlayTimeError> {
        Self::load(source, &[], PageConfig::default()).await
    }

    /// The game picker options under the current filter, sorted by label.
    pub fn game_options(&self) -> Vec<GameOption> {
        let mut options: Vec<GameOption> = self
            .catalog
            .values()
            .filter(|entry| self.filter.matches(entry))
            .map(|entry| GameOption {
                id: entry.game.id.clone(),
                label: entry.game.name.clone(),
            })
            .collect();
        options.sort_by(|a, b| a.label.cmp(&b.label));
        options
    }

    pub fn rows(&self) -> &[EditableRow] {
        &self.rows
    }

    /// Append another empty row to the table.
    pub fn add_row(&mut self) {
        self.rows.push(EditableRow::default());
    }

    /// Re-filter the game picker from the search field's text.
    pub fn set_search(&mut self, query: &str) {
        self.filter = GameFilter::from_query(&self.index, query);
    }

    /// Select a game for the row at `row`, seeding its hours field from the
    /// tracked time. Out-of-range indices are ignored.
    pub fn select_game(&mut self, row: usize, id: impl Into<GameId>) {
        let updated = self.rows.get(row).map(|r| r.with_game(&self.catalog, id.into()));
        match updated {
            Some(updated) => self.rows[row] = updated,
            None => warn!(row, "select_game on out-of-range row"),
        }
    }

    /// Update the desired-hours text of the row at `row`.
    pub fn set_desired_hours(&mut self, row: usize, text: &str) {
        let updated = self.rows.get(row).map(|r| r.with_desired_hours(text));
        match updated {
            Some(updated) => self.rows[row] = updated,
            None => warn!(row, "set_desired_hours on out-of-range row"),
        }
    }

    pub fn row_correctness(&self, row: usize) -> Option<RowCorrectness> {
        self.rows.get(row).map(|r| r.correctness(&self.catalog))
    }

    /// The tracked-time column text for the row at `row`, if a game has been
    /// selected there.
    pub fn tracked_time_display(&self, row: usize) -> Option<String> {
        self.rows.get(row)?.tracked_sec.map(human_readable_time)
    }

    /// Submit the corrections for the valid rows, per the commit policy.
    ///
    /// Awaits the provider for each submitted correction. On failure the
    /// error is returned and the caller is expected to keep the user on the
    /// page; navigation is its concern either way.
    pub async fn commit(&self) -> Result<CommitOutcome, PlayTimeError> {
        let plan = MigrationPlan::from_rows(&self.rows, &self.catalog);
        let (submitted, dropped_by_policy) = plan.apply_policy(self.config.commit_policy);

        for correction in &submitted {
            self.source.apply_time_correction(correction).await?;
        }

        info!(
            submitted = submitted.len(),
            dropped_by_policy, "committed play time corrections"
        );
        Ok(CommitOutcome {
            submitted,
            dropped_by_policy,
        })
    }
}
