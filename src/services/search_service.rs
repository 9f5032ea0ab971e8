use log::{debug, info};
use crate::types::SearchOutcome;

/// Longest query, in characters, that is matched as-is
pub const MAX_QUERY_CHARS: usize = 1000;

/// Service for matching queries against entry titles
pub struct SearchService;

impl SearchService {
    /// Create a new search service
    pub fn new() -> Self {
        Self
    }

    /// Match `query` against `titles`.
    ///
    /// An exact, case-sensitive hit wins outright. Otherwise every title that
    /// contains the query case-insensitively is listed, in input order. A
    /// missing or blank query lists nothing.
    pub fn search(&self, titles: &[String], query: Option<&str>) -> SearchOutcome {
        let query = truncate_query(query.unwrap_or_default());

        if let Some(exact) = titles.iter().find(|title| title.as_str() == query) {
            debug!("Exact title match for query '{}'", query);
            return SearchOutcome::Exact(exact.clone());
        }

        if query.trim().is_empty() {
            debug!("Empty search query received");
            return SearchOutcome::Listing { query: String::new(), results: Vec::new() };
        }

        let needle = query.to_lowercase();
        let results: Vec<String> = titles
            .iter()
            .filter(|title| title.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        info!("Search for '{}' matched {} of {} titles", query, results.len(), titles.len());
        SearchOutcome::Listing { query: query.to_string(), results }
    }
}

impl Default for SearchService {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate_query(query: &str) -> &str {
    match query.char_indices().nth(MAX_QUERY_CHARS) {
        Some((idx, _)) => {
            log::warn!("Very long search query received, truncating to {} chars", MAX_QUERY_CHARS);
            &query[..idx]
        }
        None => query,
    }
}
