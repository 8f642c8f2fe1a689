use playtime::domain::{Catalog, GameId, SECONDS_PER_HOUR};

/// Presentation state of a row, derived from its validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowCorrectness {
    Correct,
    NotCorrect,
}

/// One pending override: the selected game, its tracked seconds at selection
/// time, and the hours the user wants instead. `None` means "not yet chosen".
///
/// Rows are value objects; updates return a new row rather than mutating
/// through the sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditableRow {
    pub app_id: Option<GameId>,
    pub tracked_sec: Option<u64>,
    pub desired_hours: Option<f64>,
}

impl EditableRow {
    /// Select a game: look up its tracked seconds and seed the hours field
    /// with the current value, so the user edits from the tracked baseline
    /// rather than from blank. Tracked time defaults to 0 when the id is
    /// missing from the catalog.
    pub fn with_game(&self, catalog: &Catalog, id: GameId) -> Self {
        let tracked_sec = catalog.get(&id).map(|entry| entry.time_sec);
        Self {
            app_id: Some(id),
            tracked_sec,
            desired_hours: Some(tracked_sec.unwrap_or(0) as f64 / SECONDS_PER_HOUR),
        }
    }

    /// Parse the hours text field. An unparsable string stores NaN, which
    /// fails validation later; input errors never surface here.
    pub fn with_desired_hours(&self, text: &str) -> Self {
        Self {
            desired_hours: Some(text.trim().parse::<f64>().unwrap_or(f64::NAN)),
            ..self.clone()
        }
    }

    /// A row is valid iff a game is selected, the id still resolves in the
    /// catalog, and desired hours is strictly positive. NaN (unparsable
    /// input) fails the comparison.
    pub fn is_valid(&self, catalog: &Catalog) -> bool {
        self.app_id
            .as_ref()
            .is_some_and(|id| catalog.contains_key(id))
            && self.desired_hours.is_some_and(|hours| hours > 0.0)
    }

    pub fn correctness(&self, catalog: &Catalog) -> RowCorrectness {
        if self.is_valid(catalog) {
            RowCorrectness::Correct
        } else {
            RowCorrectness::NotCorrect
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playtime::domain::{Game, GameWithTime};

    fn catalog() -> Catalog {
        [("a", 7200), ("b", 0)]
            .into_iter()
            .map(|(id, sec)| {
                (
                    GameId::from(id),
                    GameWithTime::new(Game::new(id, id.to_uppercase()), sec),
                )
            })
            .collect()
    }

    #[test]
    fn selecting_a_game_seeds_hours_from_tracked_seconds() {
        let row = EditableRow::default().with_game(&catalog(), GameId::from("a"));

        assert_eq!(row.app_id, Some(GameId::from("a")));
        assert_eq!(row.tracked_sec, Some(7200));
        assert!((row.desired_hours.unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn selecting_an_unknown_game_seeds_zero_hours() {
        let row = EditableRow::default().with_game(&catalog(), GameId::from("ghost"));

        assert_eq!(row.tracked_sec, None);
        assert_eq!(row.desired_hours, Some(0.0));
        assert!(!row.is_valid(&catalog()));
    }

    #[test]
    fn hours_text_is_parsed_as_float() {
        let row = EditableRow::default()
            .with_game(&catalog(), GameId::from("a"))
            .with_desired_hours("12.5");
        assert_eq!(row.desired_hours, Some(12.5));
    }

    #[test]
    fn unparsable_hours_text_becomes_nan_and_invalid() {
        let catalog = catalog();
        let row = EditableRow::default()
            .with_game(&catalog, GameId::from("a"))
            .with_desired_hours("twelve");

        assert!(row.desired_hours.unwrap().is_nan());
        assert!(!row.is_valid(&catalog));
    }

    #[test]
    fn validity_requires_all_conditions() {
        let catalog = catalog();

        // no game selected
        assert!(!EditableRow::default().is_valid(&catalog));

        // hours unset
        let row = EditableRow {
            app_id: Some(GameId::from("a")),
            tracked_sec: Some(7200),
            desired_hours: None,
        };
        assert!(!row.is_valid(&catalog));

        // hours zero
        let row = EditableRow::default()
            .with_game(&catalog, GameId::from("a"))
            .with_desired_hours("0");
        assert!(!row.is_valid(&catalog));

        // hours negative
        let row = EditableRow::default()
            .with_game(&catalog, GameId::from("a"))
            .with_desired_hours("-1.5");
        assert!(!row.is_valid(&catalog));

        // id not in catalog
        let row = EditableRow {
            app_id: Some(GameId::from("ghost")),
            tracked_sec: Some(100),
            desired_hours: Some(1.0),
        };
        assert!(!row.is_valid(&catalog));

        // everything present and positive
        let row = EditableRow::default()
            .with_game(&catalog, GameId::from("a"))
            .with_desired_hours("5");
        assert!(row.is_valid(&catalog));
        assert_eq!(row.correctness(&catalog), RowCorrectness::Correct);
    }

    #[test]
    fn seeded_zero_tracked_time_is_not_yet_valid() {
        // Selecting a game with 0 tracked seconds seeds 0 hours; the user
        // must enter a positive value before the row counts.
        let catalog = catalog();
        let row = EditableRow::default().with_game(&catalog, GameId::from("b"));

        assert_eq!(row.correctness(&catalog), RowCorrectness::NotCorrect);
    }
}
