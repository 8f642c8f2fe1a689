use serde::{Deserialize, Serialize};

use super::{Game, SECONDS_PER_HOUR};

/// A user-specified override of a game's tracked play time.
///
/// Edited in hours in the UI, persisted in seconds by the host platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayTimeCorrection {
    pub game: Game,
    /// The new total play time in seconds.
    pub time_sec: u64,
}

impl PlayTimeCorrection {
    pub fn new(game: Game, time_sec: u64) -> Self {
        Self { game, time_sec }
    }

    /// Build a correction from an hours value, the inverse of
    /// [`GameWithTime::tracked_hours`](super::GameWithTime::tracked_hours).
    ///
    /// Rounds to whole seconds. Callers validate that `hours` is a positive
    /// finite number before reaching this point.
    pub fn from_hours(game: Game, hours: f64) -> Self {
        Self {
            game,
            time_sec: (hours * SECONDS_PER_HOUR).round() as u64,
        }
    }
}
