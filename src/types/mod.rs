use std::path::PathBuf;
use std::sync::Arc;

use crate::services::EntryStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EntryStore>,
    pub static_dir: Arc<PathBuf>,
}

/// Markdown rendering result
#[derive(Debug, Clone)]
pub struct MarkdownResult {
    pub html: String,
    pub toc: String,
}

/// Template rendering context
#[derive(Debug, Clone)]
pub struct TemplateContext {
    pub title: String,
    pub content: String,
    pub sidebar: String,
    pub fab: String,
}

/// A single entry ready for display
#[derive(Debug, Clone)]
pub struct EntryView {
    pub title: String,
    pub body: String,
    pub modified: Option<std::time::SystemTime>,
}

/// Outcome of a search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query named an existing entry exactly
    Exact(String),
    /// Titles containing the query, case-insensitively
    Listing { query: String, results: Vec<String> },
}
