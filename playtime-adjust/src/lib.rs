//! Manual play-time adjustment workflow.
//!
//! This crate implements the logic behind a settings page that lets a user
//! search their game library, pick a title, and override its tracked total
//! play time:
//!
//! - [`search`] - diacritic-insensitive full-text index over game names,
//!   plus the wildcard pattern syntax driving the game picker filter
//! - [`page`] - the page state machine: editable rows, validation, and the
//!   migration commit through an injected [`playtime::PlayTimeSource`]
//!
//! # Example
//!
//! ```ignore
//! use playtime_adjust::{AdjustTimePage, PageConfig};
//!
//! let mut page = AdjustTimePage::load(source, &excludes, PageConfig::default()).await?;
//! page.set_search("dark souls");
//! page.select_game(0, page.game_options()[0].id.clone());
//! page.set_desired_hours(0, "12.5");
//! let outcome = page.commit().await?;
//! ```

pub mod page;
pub mod search;

pub use page::{
    AdjustTimePage, CommitOutcome, CommitPolicy, EditableRow, GameOption, MigrationPlan,
    PageConfig, RowCorrectness,
};
pub use search::{search_pattern, GameFilter, GameSearchIndex};
