use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::data::Record;

pub const SEARCH_FILTER: &str = "search";

/// A list query: an extensible mapping of filter name to value. Queries are
/// cached by their serialized form, so the filter map is kept sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    filters: BTreeMap<String, String>,
}

impl ListQuery {
    pub fn new() -> Self {
        ListQuery::default()
    }

    /// Query filtered by a search term. An empty term produces the
    /// unfiltered query, with no `search` key at all.
    pub fn search(term: &str) -> Self {
        let mut query = ListQuery::new();
        query.set_search(term);
        query
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.filters.insert(name.to_string(), value.to_string());
    }

    pub fn remove(&mut self, name: &str) {
        self.filters.remove(name);
    }

    /// Set or clear the search filter. An empty term removes the key
    /// entirely rather than setting it to an empty string.
    pub fn set_search(&mut self, term: &str) {
        if term.is_empty() {
            self.filters.remove(SEARCH_FILTER);
        } else {
            self.set(SEARCH_FILTER, term);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.filters.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Canonical serialized form of the query, used as its cache key.
    pub fn cache_key(&self) -> String {
        // A map of plain strings cannot fail to serialize
        serde_json::to_string(&self.filters).unwrap_or_default()
    }
}

/// Cached result set for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct ListResult {
    /// False until the first fetch for this exact query has completed
    pub has_resolved: bool,
    pub records: Vec<Record>,
}
