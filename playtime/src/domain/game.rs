use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Seconds per hour, the conversion factor between the stored play time
/// and the hours shown to the user.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// A stable game identifier as reported by the host platform.
///
/// Wraps String as the platform uses opaque string app ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for GameId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for GameId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A game as known to the host platform. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub name: String,
}

impl Game {
    pub fn new(id: impl Into<GameId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A game together with its currently tracked play time in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameWithTime {
    pub game: Game,
    /// Tracked play time in seconds, before any correction.
    pub time_sec: u64,
}

impl GameWithTime {
    pub fn new(game: Game, time_sec: u64) -> Self {
        Self { game, time_sec }
    }

    /// Tracked play time expressed in hours, the unit the user edits in.
    pub fn tracked_hours(&self) -> f64 {
        self.time_sec as f64 / SECONDS_PER_HOUR
    }
}

/// The full set of games with tracked play time, keyed by game id.
pub type Catalog = HashMap<GameId, GameWithTime>;
