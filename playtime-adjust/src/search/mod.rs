//! Full-text search over game names.
//!
//! The index is tiny and rebuilt from scratch on every catalog load; there is
//! no incremental update path. Matching is diacritic-insensitive: both
//! indexed names and query terms are NFD-decomposed and stripped of combining
//! marks, so "café" is found by "cafe" and vice versa.
//!
//! # Query syntax
//!
//! A query typed by the user is first turned into a search pattern by
//! [`search_pattern`]:
//!
//! - `"dark souls"` → `"*dark* *souls*"` (every term a substring, any position)
//! - `"dark*"` → passed through verbatim (the user wrote wildcards themselves)
//! - `""` → `"**"` (matches everything)
//!
//! The pattern is then evaluated by [`GameSearchIndex::search`]; every
//! whitespace-separated term must match.

mod filter;
mod index;
mod pattern;
mod tokenizer;

pub use filter::GameFilter;
pub use index::GameSearchIndex;
pub use pattern::search_pattern;
