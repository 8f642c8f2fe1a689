mod game_id_filter;
mod name_prefix_filter;

pub use game_id_filter::GameIdFilter;
pub use name_prefix_filter::NamePrefixFilter;

use super::GameWithTime;

/// A predicate for dropping catalog entries at fetch time, e.g. the host
/// shell's own self-entry or non-game shortcuts.
pub trait ExcludeFilter {
    fn excludes(&self, entry: &GameWithTime) -> bool;
}

pub type BoxedExcludeFilter = Box<dyn ExcludeFilter + Send + Sync>;
