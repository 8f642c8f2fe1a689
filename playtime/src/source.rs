use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{filters::BoxedExcludeFilter, Catalog, PlayTimeCorrection};

/// Errors that can occur when talking to a play time provider.
#[derive(Debug, Error)]
pub enum PlayTimeError {
    #[error("failed to fetch play time catalog: {0}")]
    FetchFailed(String),
    #[error("failed to apply time correction: {0}")]
    CorrectionFailed(String),
    #[error("{0}")]
    Unknown(String),
}

impl PlayTimeError {
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::Unknown(msg.into())
    }
}

/// Outbound port for the host platform's play time service.
///
/// This trait defines the contract that any play time provider (the host
/// shell, or mocks in tests) must implement. The page logic only ever talks
/// to the provider through this trait, injected at construction time.
#[async_trait]
pub trait PlayTimeSource: Send + Sync {
    /// Fetch the full catalog of games with tracked play time, minus any
    /// entries matched by the given exclusion filters.
    ///
    /// Resolves once per page mount; errors propagate to the caller.
    async fn fetch_all_play_time(
        &self,
        excludes: &[BoxedExcludeFilter],
    ) -> Result<Catalog, PlayTimeError>;

    /// Persist a manual override of one game's tracked play time.
    ///
    /// Only success or failure is consumed; there is no return payload.
    async fn apply_time_correction(
        &self,
        correction: &PlayTimeCorrection,
    ) -> Result<(), PlayTimeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Verify the trait is object-safe (can be used as a trait object)
    fn _assert_source_object_safe(_: &dyn PlayTimeSource) {}

    #[test]
    fn error_display() {
        let err = PlayTimeError::FetchFailed("timeout".to_string());
        assert_eq!(err.to_string(), "failed to fetch play time catalog: timeout");

        let err = PlayTimeError::unknown("boom");
        assert_eq!(err.to_string(), "boom");
    }
}
