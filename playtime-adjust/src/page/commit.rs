use playtime::domain::{Catalog, PlayTimeCorrection};

use super::row::EditableRow;

/// How many valid rows a commit submits.
///
/// The page historically submitted only the first valid row even though the
/// table scaffolding supports several. `FirstValidRow` keeps that contract
/// the default; bulk submission is an explicit opt-in rather than a silent
/// behavior change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitPolicy {
    #[default]
    FirstValidRow,
    AllValidRows,
}

/// The ordered corrections a commit would submit, derived from the valid
/// rows only. Invalid rows are excluded silently, not reported.
#[derive(Debug, Clone)]
pub struct MigrationPlan {
    corrections: Vec<PlayTimeCorrection>,
}

impl MigrationPlan {
    pub fn from_rows(rows: &[EditableRow], catalog: &Catalog) -> Self {
        let corrections = rows
            .iter()
            .filter(|row| row.is_valid(catalog))
            .filter_map(|row| {
                let game = catalog.get(row.app_id.as_ref()?)?.game.clone();
                Some(PlayTimeCorrection::from_hours(game, row.desired_hours?))
            })
            .collect();
        Self { corrections }
    }

    pub fn corrections(&self) -> &[PlayTimeCorrection] {
        &self.corrections
    }

    pub fn is_empty(&self) -> bool {
        self.corrections.is_empty()
    }

    /// Split the plan into the corrections to submit and the count dropped
    /// by the policy.
    pub fn apply_policy(self, policy: CommitPolicy) -> (Vec<PlayTimeCorrection>, usize) {
        match policy {
            CommitPolicy::AllValidRows => (self.corrections, 0),
            CommitPolicy::FirstValidRow => {
                let dropped = self.corrections.len().saturating_sub(1);
                (self.corrections.into_iter().take(1).collect(), dropped)
            }
        }
    }
}

/// What a commit actually did.
#[derive(Debug, Clone, Default)]
pub struct CommitOutcome {
    /// Corrections submitted to the provider, in row order.
    pub submitted: Vec<PlayTimeCorrection>,
    /// Valid corrections the commit policy refused to submit.
    pub dropped_by_policy: usize,
}
