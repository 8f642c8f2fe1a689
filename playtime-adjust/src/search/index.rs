//! The in-memory index the game picker searches against.

use std::collections::{HashMap, HashSet};
use tracing::debug;

use playtime::domain::{Catalog, GameId};

use super::pattern::wildcard_match;
use super::tokenizer::{fold, stem, tokenize};

/// Token-based index from normalized game-name tokens to game ids.
///
/// One document per game: the id is the reference, only the name is
/// searched. The index is derived, read-only state; rebuild it whenever the
/// catalog is reloaded.
#[derive(Debug, Default)]
pub struct GameSearchIndex {
    postings: HashMap<String, HashSet<GameId>>,
}

impl GameSearchIndex {
    /// Build the index over the full catalog.
    ///
    /// Every name token is indexed in its folded surface form, and under its
    /// stem as well so that bare query terms match across plural/inflection
    /// variants.
    pub fn build(catalog: &Catalog) -> Self {
        let mut postings: HashMap<String, HashSet<GameId>> = HashMap::new();
        for entry in catalog.values() {
            for token in tokenize(&entry.game.name) {
                let stemmed = stem(&token);
                if stemmed != token {
                    postings
                        .entry(stemmed)
                        .or_default()
                        .insert(entry.game.id.clone());
                }
                postings
                    .entry(token)
                    .or_default()
                    .insert(entry.game.id.clone());
            }
        }

        debug!(
            games = catalog.len(),
            tokens = postings.len(),
            "built game search index"
        );
        Self { postings }
    }

    /// Evaluate a search pattern, returning the ids of matching games.
    ///
    /// The pattern is split on whitespace; a game matches only if every term
    /// matches one of its tokens. Wildcard terms glob against tokens, bare
    /// terms are stemmed and looked up exactly.
    pub fn search(&self, pattern: &str) -> HashSet<GameId> {
        let mut matched: Option<HashSet<GameId>> = None;
        for term in pattern.split_whitespace() {
            let ids = self.term_matches(term);
            matched = Some(match matched {
                Some(acc) => acc.intersection(&ids).cloned().collect(),
                None => ids,
            });
            if matched.as_ref().is_some_and(HashSet::is_empty) {
                break;
            }
        }
        matched.unwrap_or_default()
    }

    fn term_matches(&self, term: &str) -> HashSet<GameId> {
        let folded = fold(term);
        if folded.contains('*') {
            self.postings
                .iter()
                .filter(|(token, _)| wildcard_match(&folded, token))
                .flat_map(|(_, ids)| ids.iter().cloned())
                .collect()
        } else {
            self.postings
                .get(&stem(&folded))
                .cloned()
                .unwrap_or_default()
        }
    }
}
