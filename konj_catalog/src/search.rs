// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typo-tolerant search over the catalog.
//!
//! A query is split into lowercase tokens. A record matches when every token
//! matches one of its fields:
//!
//! - a token contained in a field scores `1.0`;
//! - otherwise a token of at least [`MIN_FUZZY_LEN`] characters scores the
//!   best Jaro-Winkler similarity against the field's words, if that reaches
//!   [`FUZZY_THRESHOLD`].
//!
//! Matches are ranked by their mean token score. Equal scores keep catalog
//! order.

use rapidfuzz::distance::jaro_winkler;

use crate::catalog::Catalog;
use crate::record::{ComponentRecord, HookRecord};

/// Lowest Jaro-Winkler similarity accepted as a fuzzy match.
pub const FUZZY_THRESHOLD: f64 = 0.85;

/// Shortest token that may match fuzzily; shorter tokens need a substring hit.
pub const MIN_FUZZY_LEN: usize = 3;

/// Search results, best match first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResults<'a> {
    /// Matching components.
    pub components: Vec<&'a ComponentRecord>,
    /// Matching hooks.
    pub hooks: Vec<&'a HookRecord>,
}

impl SearchResults<'_> {
    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.hooks.is_empty()
    }
}

/// Normalized searchable text of one record.
#[derive(Clone, Debug)]
struct Fields {
    fields: Vec<Field>,
}

#[derive(Clone, Debug)]
struct Field {
    text: String,
    words: Vec<String>,
}

impl Field {
    fn new(raw: &str) -> Self {
        let text = raw.to_lowercase();
        let words = tokenize(&text).map(str::to_owned).collect();
        Self { text, words }
    }

    fn score(&self, token: &str) -> Option<f64> {
        if self.text.contains(token) {
            return Some(1.0);
        }
        if token.chars().count() < MIN_FUZZY_LEN {
            return None;
        }
        self.words
            .iter()
            .map(|word| jaro_winkler::similarity(token.chars(), word.chars()))
            .filter(|s| *s >= FUZZY_THRESHOLD)
            .max_by(f64::total_cmp)
    }
}

impl Fields {
    fn new<'s>(raw: impl IntoIterator<Item = &'s str>) -> Self {
        Self {
            fields: raw.into_iter().map(Field::new).collect(),
        }
    }

    /// Mean token score, or `None` if some token matches no field.
    fn score(&self, tokens: &[&str]) -> Option<f64> {
        let mut total = 0.0;
        for token in tokens {
            total += self
                .fields
                .iter()
                .filter_map(|f| f.score(token))
                .max_by(f64::total_cmp)?;
        }
        Some(total / tokens.len() as f64)
    }
}

/// Precomputed search fields for a catalog.
///
/// ```
/// use konj_catalog::{Catalog, SearchIndex};
///
/// let catalog = Catalog::bundled().unwrap();
/// let index = SearchIndex::new(&catalog);
/// let hits = index.search("dilog");
/// assert!(hits.components.iter().any(|c| c.key == "dialog"));
/// assert!(index.search("   ").is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct SearchIndex<'a> {
    catalog: &'a Catalog,
    components: Vec<Fields>,
    hooks: Vec<Fields>,
}

impl<'a> SearchIndex<'a> {
    /// Index components on title, description, category and model, and hooks
    /// on title and description.
    pub fn new(catalog: &'a Catalog) -> Self {
        let components = catalog
            .components()
            .iter()
            .map(|c| {
                Fields::new([
                    c.title.as_str(),
                    c.description.as_str(),
                    c.category.as_str(),
                    c.model.as_str(),
                ])
            })
            .collect();
        let hooks = catalog
            .hooks()
            .iter()
            .map(|h| Fields::new([h.title.as_str(), h.description.as_str()]))
            .collect();
        Self {
            catalog,
            components,
            hooks,
        }
    }

    /// The indexed catalog.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Records matching `query`, best first.
    ///
    /// An empty or whitespace-only query matches nothing.
    pub fn search(&self, query: &str) -> SearchResults<'a> {
        let query = query.to_lowercase();
        let tokens: Vec<&str> = tokenize(&query).collect();
        if tokens.is_empty() {
            return SearchResults::default();
        }
        let results = SearchResults {
            components: rank(self.catalog.components(), &self.components, &tokens),
            hooks: rank(self.catalog.hooks(), &self.hooks, &tokens),
        };
        tracing::debug!(
            query = %query,
            components = results.components.len(),
            hooks = results.hooks.len(),
            "catalog search"
        );
        results
    }
}

fn rank<'a, T>(records: &'a [T], fields: &[Fields], tokens: &[&str]) -> Vec<&'a T> {
    let mut scored: Vec<(f64, &'a T)> = records
        .iter()
        .zip(fields)
        .filter_map(|(record, f)| Some((f.score(tokens)?, record)))
        .collect();
    // Stable, so equal scores keep catalog order.
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().map(|(_, record)| record).collect()
}

fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<'a>(results: &SearchResults<'a>) -> Vec<&'a str> {
        results.components.iter().map(|c| c.key.as_str()).collect()
    }

    #[test]
    fn empty_query_matches_nothing() {
        let cat = Catalog::bundled().unwrap();
        let index = SearchIndex::new(&cat);
        assert!(index.search("").is_empty());
        assert!(index.search(" \t ").is_empty());
        assert!(index.search("--").is_empty());
    }

    #[test]
    fn substring_match() {
        let cat = Catalog::bundled().unwrap();
        let index = SearchIndex::new(&cat);
        let hits = index.search("butt");
        let k = keys(&hits);
        assert!(k.contains(&"button"));
        assert!(!k.contains(&"loading"));
        assert!(hits.hooks.is_empty());
    }

    #[test]
    fn typo_matches_fuzzily() {
        let cat = Catalog::bundled().unwrap();
        let index = SearchIndex::new(&cat);
        assert!(keys(&index.search("dilog")).contains(&"dialog"));
    }

    #[test]
    fn every_token_must_match() {
        let cat = Catalog::bundled().unwrap();
        let index = SearchIndex::new(&cat);
        let k = keys(&index.search("modal primitive"));
        assert_eq!(k, ["dialog"]);
    }

    #[test]
    fn short_tokens_do_not_match_fuzzily() {
        let f = Field::new("Dialog");
        assert_eq!(f.score("dx"), None);
        assert_eq!(f.score("di"), Some(1.0));
    }

    #[test]
    fn hooks_are_searched() {
        let cat = Catalog::bundled().unwrap();
        let index = SearchIndex::new(&cat);
        let hits = index.search("swip");
        assert_eq!(hits.hooks.len(), 1);
        assert_eq!(hits.hooks[0].key, "use-touch-dialog-drag");
    }

    #[test]
    fn exact_hits_rank_before_fuzzy_ones() {
        let f_exact = Fields::new(["Select"]);
        let f_fuzzy = Fields::new(["Selekt"]);
        let exact = f_exact.score(&["select"]).unwrap();
        let fuzzy = f_fuzzy.score(&["select"]).unwrap();
        assert!(exact > fuzzy);
    }
}
