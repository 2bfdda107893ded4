use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::model::SearchResultId;
use crate::MIN_SEARCH_QUERY_CHARS;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Stop,
    Route,
    Address,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub id: SearchResultId,
    pub kind: ResultKind,
    pub name: String,
    pub subtitle: String,
    pub eta: Option<String>,
    pub distance: String,
    pub routes: Vec<String>,
}

impl SearchResult {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.subtitle.to_lowercase().contains(needle)
            || self
                .routes
                .iter()
                .any(|route| route.to_lowercase().contains(needle))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Destination {
    pub name: String,
    pub subtitle: String,
    pub distance: String,
    pub routes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    results: Vec<SearchResult>,
    catalog: Vec<SearchResult>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(catalog::search_catalog())
    }
}

impl SearchState {
    pub fn new(catalog: Vec<SearchResult>) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            catalog,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Whether the query is long enough to be matched at all.
    pub fn is_searching(&self) -> bool {
        self.query.trim().chars().count() > MIN_SEARCH_QUERY_CHARS
    }

    /// Recomputes results for `query`. Short queries clear them.
    pub fn set_query(&mut self, query: impl Into<String>) -> usize {
        self.query = query.into();
        let needle = self.query.trim().to_lowercase();
        self.results = if self.is_searching() {
            self.catalog
                .iter()
                .filter(|result| result.matches(&needle))
                .cloned()
                .collect()
        } else {
            Vec::new()
        };
        self.results.len()
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
    }

    pub fn find(&self, id: &SearchResultId) -> Option<&SearchResult> {
        self.catalog.iter().find(|result| &result.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(state: &SearchState) -> Vec<&str> {
        state.results().iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn short_queries_have_no_results() {
        let mut state = SearchState::default();
        assert_eq!(state.set_query("Un"), 0);
        assert_eq!(state.set_query("  st  "), 0);
        assert_eq!(state.query(), "  st  ");
        assert!(!state.is_searching());
    }

    #[test]
    fn matches_name_case_insensitively() {
        let mut state = SearchState::default();
        state.set_query("student");
        assert_eq!(names(&state), ["Student Center Plaza"]);
    }

    #[test]
    fn matches_route_labels_in_catalog_order() {
        let mut state = SearchState::default();
        state.set_query("route c");
        assert_eq!(names(&state), ["University Main Gate", "Student Center Plaza"]);
    }

    #[test]
    fn shortening_the_query_clears_results() {
        let mut state = SearchState::default();
        assert!(state.set_query("Queen") > 0);
        state.set_query("Qu");
        assert!(state.results().is_empty());
    }

    #[test]
    fn clear_resets_query_and_results() {
        let mut state = SearchState::default();
        state.set_query("campus");
        state.clear();
        assert_eq!(state.query(), "");
        assert!(state.results().is_empty());
    }
}
